//! Logger - dual-sink dispatch over a level gate

use std::fmt;
use std::future::Future;
use std::time::Instant;

use tracing::{debug, instrument, warn};

use contracts::{
    redact, Level, LoadedConfig, LocalSink, LogRecord, RemoteConfig, RemoteMessage, RemoteSink,
};

use crate::error::DispatcherError;
use crate::gate::{LevelGate, Outcome};
use crate::metrics::{DispatchMetrics, MetricsSnapshot};
use crate::sinks::SlackClient;

/// Module name the logger uses for its own diagnostics
pub const LOGGER_MODULE: &str = "logger";

/// Name given to the Slack remote sink
const SLACK_SINK_NAME: &str = "slack";

/// A remote client bound to its destination
#[derive(Debug, Clone)]
pub struct RemoteTarget<R> {
    client: R,
    destination: String,
}

impl<R> RemoteTarget<R> {
    pub fn new(client: R, destination: impl Into<String>) -> Self {
        Self {
            client,
            destination: destination.into(),
        }
    }

    pub fn client(&self) -> &R {
        &self.client
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

/// Leveled logger with an optional remote mirror
///
/// Immutable after construction; share it behind an `Arc`.
pub struct Logger<L, R = SlackClient> {
    gate: LevelGate,
    local: L,
    remote: Option<RemoteTarget<R>>,
    metrics: DispatchMetrics,
}

impl<L: LocalSink> Logger<L> {
    /// Logger that never posts remotely
    pub fn local_only(gate: LevelGate, local: L) -> Self {
        Self {
            gate,
            local,
            remote: None,
            metrics: DispatchMetrics::new(),
        }
    }

    /// Build the process logger from loaded configuration
    ///
    /// Reports startup diagnostics through the gate. A Slack client that
    /// cannot be created is reported and leaves the logger local-only.
    pub fn init(loaded: LoadedConfig, local: L) -> Self {
        Self::init_with(loaded, local, |remote| {
            SlackClient::from_remote(SLACK_SINK_NAME, remote)
                .map_err(|e| DispatcherError::remote_client(SLACK_SINK_NAME, e))
        })
    }
}

impl<L: LocalSink, R> Logger<L, R> {
    /// Logger mirroring every `log_remote` call to `client`
    pub fn with_remote(gate: LevelGate, local: L, client: R, destination: impl Into<String>) -> Self {
        Self {
            gate,
            local,
            remote: Some(RemoteTarget::new(client, destination)),
            metrics: DispatchMetrics::new(),
        }
    }

    /// Build from loaded configuration with a custom remote client factory
    #[instrument(name = "logger_init", skip_all, fields(remote = loaded.config.remote_enabled()))]
    pub fn init_with<F>(loaded: LoadedConfig, local: L, make_client: F) -> Self
    where
        F: FnOnce(&RemoteConfig) -> Result<R, DispatcherError>,
    {
        let LoadedConfig {
            config,
            diagnostics,
            supplied_token,
            supplied_channel,
        } = loaded;
        let gate = LevelGate::from_config(&config);

        let mut logger = Self {
            gate,
            local,
            remote: None,
            metrics: DispatchMetrics::new(),
        };

        for diagnostic in &diagnostics {
            logger.log_internal(Level::Err, format_args!("{diagnostic}"));
        }

        if let Some(token) = &supplied_token {
            logger.log_internal(
                Level::DebugVerbose,
                format_args!("slack api token: {}", redact(token)),
            );
        }
        if let Some(channel) = &supplied_channel {
            logger.log_internal(Level::DebugVerbose, format_args!("slack channel: {channel}"));
        }

        if let Some(remote) = &config.remote {
            match make_client(remote) {
                Ok(client) => logger.remote = Some(RemoteTarget::new(client, &remote.channel)),
                Err(e) => {
                    warn!(error = %e, "Remote sink disabled");
                    logger.log_internal(Level::Err, format_args!("{e}"));
                }
            }
        }

        debug!(remote = logger.remote_enabled(), "Logger initialized");
        logger
    }

    pub fn local_sink(&self) -> &L {
        &self.local
    }

    pub fn remote(&self) -> Option<&RemoteTarget<R>> {
        self.remote.as_ref()
    }

    /// Whether `log_remote` posts anywhere
    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }

    /// Current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Local-only emission, applying PANIC/FATAL control flow
    pub fn log(&self, module: &str, level: Level, args: fmt::Arguments<'_>) {
        self.dispatch(&LogRecord::new(module, level, args)).resolve();
    }

    /// Local-only emission without applying the outcome
    pub fn dispatch(&self, record: &LogRecord) -> Outcome {
        let outcome = self.gate.emit(&self.local, record);
        if outcome.was_emitted() {
            self.metrics.inc_emitted_count();
        } else {
            self.metrics.inc_discarded_count();
        }
        observability::record_line(record.level.as_str(), outcome.was_emitted());
        outcome
    }

    /// Logger's own diagnostics; never terminal
    fn log_internal(&self, level: Level, args: fmt::Arguments<'_>) {
        let outcome = self.dispatch(&LogRecord::new(LOGGER_MODULE, level, args));
        debug_assert!(matches!(outcome, Outcome::Emitted | Outcome::Discarded));
    }
}

impl<L: LocalSink, R: RemoteSink + Sync> Logger<L, R> {
    /// Dual-sink emission, applying PANIC/FATAL control flow
    ///
    /// The message is formatted before the returned future is created; the
    /// future completes once the remote attempt (if any) and the local
    /// emission are done.
    pub fn log_remote<'a>(
        &'a self,
        module: &str,
        level: Level,
        args: fmt::Arguments<'_>,
    ) -> impl Future<Output = ()> + Send + 'a {
        let record = LogRecord::new(module, level, args);
        async move { self.forward(record).await.resolve() }
    }

    /// Dual-sink emission without applying the outcome
    ///
    /// Remote failures are reported locally at ERR and never returned.
    pub async fn forward(&self, record: LogRecord) -> Outcome {
        if let Some(remote) = &self.remote {
            self.post_remote(remote, &record).await;
        }
        self.dispatch(&record)
    }

    async fn post_remote(&self, remote: &RemoteTarget<R>, record: &LogRecord) {
        let message = RemoteMessage::new(record.remote_body(), record.module.as_str());
        let started = Instant::now();
        let result = remote
            .client
            .post_message(&remote.destination, &message)
            .await;
        observability::record_remote_latency_ms(
            remote.client.name(),
            started.elapsed().as_secs_f64() * 1000.0,
        );

        match result {
            Ok(delivery) => {
                self.metrics.inc_remote_post_count();
                observability::record_remote_post(remote.client.name(), true);
                self.log_internal(
                    Level::DebugVerbose,
                    format_args!(
                        "{} message successfully sent to channel {} at {}",
                        record.module, delivery.channel_id, delivery.timestamp
                    ),
                );
            }
            Err(e) => {
                self.metrics.inc_remote_failure_count();
                observability::record_remote_post(remote.client.name(), false);
                self.log_internal(
                    Level::Err,
                    format_args!("{} logger error: {e}", record.module),
                );
            }
        }
    }
}
