//! # Integration Tests
//!
//! End-to-end behaviour of the logger without a network:
//! - environment → configuration → logger wiring
//! - dual-sink dispatch against a scripted remote
//! - concurrent use of a shared logger

#[cfg(test)]
mod support {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Mutex;

    use contracts::{ContractError, Delivery, RemoteMessage, RemoteSink};

    /// Variable lookup backed by a fixed map
    pub fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    /// Remote double that fails the posts listed in `failures`
    #[derive(Default)]
    pub struct ScriptedRemote {
        pub posts: Mutex<Vec<(String, RemoteMessage)>>,
        pub failures: Vec<u64>,
        counter: AtomicU64,
    }

    impl ScriptedRemote {
        pub fn failing_on(failures: Vec<u64>) -> Self {
            Self {
                failures,
                ..Self::default()
            }
        }

        pub fn posts(&self) -> Vec<(String, RemoteMessage)> {
            self.posts.lock().unwrap().clone()
        }
    }

    impl RemoteSink for ScriptedRemote {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn post_message(
            &self,
            destination: &str,
            message: &RemoteMessage,
        ) -> Result<Delivery, ContractError> {
            let n = self.counter.fetch_add(1, Ordering::SeqCst);
            self.posts
                .lock()
                .unwrap()
                .push((destination.to_string(), message.clone()));
            if self.failures.contains(&n) {
                return Err(ContractError::remote_rejected("scripted", "invalid_auth"));
            }
            Ok(Delivery {
                channel_id: "C0LOGS".to_string(),
                timestamp: format!("1700000000.{n:06}"),
            })
        }
    }
}

#[cfg(test)]
mod config_wiring_tests {
    use super::support::{env, ScriptedRemote};
    use config_loader::ConfigLoader;
    use dispatcher::{Level, Logger, MemorySink};

    #[test]
    fn test_missing_slack_variables_degrade_to_local() {
        let loaded = ConfigLoader::from_lookup(env(&[("DEBUG", "")]));
        let logger = Logger::init(loaded, MemorySink::new("mem"));

        assert!(!logger.remote_enabled());
        logger.log("api", Level::Debug, format_args!("cache miss"));
        assert_eq!(
            logger.local_sink().lines(),
            vec![
                "logger [ERR] SLACKAPI_TOKEN env variable not set",
                "logger [ERR] SLACK_CHANNEL env variable not set",
                "api [DEBUG] cache miss",
            ]
        );
    }

    #[test]
    fn test_full_environment_enables_remote() {
        let loaded = ConfigLoader::from_lookup(env(&[
            ("SLACKAPI_TOKEN", "xoxb-123"),
            ("SLACK_CHANNEL", "ops-logs"),
        ]));
        let logger = Logger::init_with(loaded, MemorySink::new("mem"), |_| {
            Ok(ScriptedRemote::default())
        });

        assert!(logger.remote_enabled());
        assert_eq!(logger.remote().unwrap().destination(), "ops-logs");
        // No diagnostics without DEBUGVERBOSE
        assert!(logger.local_sink().lines().is_empty());
    }

    #[test]
    fn test_debug_verbose_enables_debug() {
        let loaded = ConfigLoader::from_lookup(env(&[
            ("DEBUGVERBOSE", ""),
            ("SLACKAPI_TOKEN", "t"),
            ("SLACK_CHANNEL", "c"),
        ]));
        let logger = Logger::init_with(loaded, MemorySink::new("mem"), |_| {
            Ok(ScriptedRemote::default())
        });
        logger.local_sink().clear();

        logger.log("api", Level::Debug, format_args!("a"));
        logger.log("api", Level::DebugVerbose, format_args!("b"));
        assert_eq!(
            logger.local_sink().lines(),
            vec!["api [DEBUG] a", "api [DEBUGVERBOSE] b"]
        );
    }
}

#[cfg(test)]
mod dispatch_tests {
    use super::support::ScriptedRemote;
    use dispatcher::{emit, emit_remote, Level, LevelGate, Logger, MemorySink, Outcome};

    fn logger(remote: ScriptedRemote, verbose: bool) -> Logger<MemorySink, ScriptedRemote> {
        Logger::with_remote(
            LevelGate::new(false, verbose),
            MemorySink::new("mem"),
            remote,
            "logs",
        )
    }

    #[test]
    fn test_log_scenario_info() {
        let logger = logger(ScriptedRemote::default(), false);
        emit!(logger, "api", "INFO", "started on port {}", 8080);

        assert_eq!(logger.local_sink().lines(), vec!["api [INFO] started on port 8080"]);
        assert!(logger.remote().unwrap().client().posts().is_empty());
    }

    #[test]
    fn test_log_scenario_debug_silent() {
        let logger = logger(ScriptedRemote::default(), false);
        emit!(logger, "api", "DEBUG", "cache miss");
        assert!(logger.local_sink().lines().is_empty());
    }

    #[tokio::test]
    async fn test_remote_scenario_warn() {
        let logger = logger(ScriptedRemote::default(), false);
        emit_remote!(logger, "worker", "WARN", "queue depth {}", 50).await;

        let posts = logger.remote().unwrap().client().posts();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].0, "logs");
        assert_eq!(posts[0].1.text, "```worker [WARN] queue depth 50```");
        assert_eq!(logger.local_sink().lines(), vec!["worker [WARN] queue depth 50"]);
    }

    #[tokio::test]
    async fn test_remote_posts_even_when_level_is_gated() {
        let logger = logger(ScriptedRemote::default(), false);
        emit_remote!(logger, "worker", Level::Debug, "hidden locally").await;

        assert_eq!(logger.remote().unwrap().client().posts().len(), 1);
        assert!(logger.local_sink().lines().is_empty());
    }

    #[tokio::test]
    async fn test_failures_are_isolated_per_call() {
        let logger = logger(ScriptedRemote::failing_on(vec![1]), true);

        for i in 0..3 {
            emit_remote!(logger, "job", Level::Info, "step {}", i).await;
        }

        let lines = logger.local_sink().lines();
        assert_eq!(
            lines,
            vec![
                "logger [DEBUGVERBOSE] job message successfully sent to channel C0LOGS at 1700000000.000000",
                "job [INFO] step 0",
                "logger [ERR] job logger error: remote sink 'scripted' rejected message: invalid_auth",
                "job [INFO] step 1",
                "logger [DEBUGVERBOSE] job message successfully sent to channel C0LOGS at 1700000000.000002",
                "job [INFO] step 2",
            ]
        );

        let snapshot = logger.snapshot();
        assert_eq!(snapshot.remote_post_count, 2);
        assert_eq!(snapshot.remote_failure_count, 1);
    }

    #[tokio::test]
    async fn test_panic_outcome_after_remote_post() {
        let logger = logger(ScriptedRemote::failing_on(vec![0]), false);
        let outcome = logger
            .forward(contracts::LogRecord::with_message("core", Level::Panic, "invariant broken"))
            .await;

        assert_eq!(outcome, Outcome::Panic("core [PANIC] invariant broken".to_string()));
        assert_eq!(logger.remote().unwrap().client().posts().len(), 1);
        assert_eq!(logger.local_sink().lines().len(), 2);
    }
}

#[cfg(test)]
mod concurrency_tests {
    use std::sync::{Arc, Mutex};
    use std::thread;

    use dispatcher::{Level, LevelGate, Logger, LocalSink, WriterSink};

    /// Writer shared with the test so output can be read after the sink is moved
    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_concurrent_lines_do_not_interleave() {
        let buffer = SharedBuffer::default();
        let sink = WriterSink::new("shared", buffer.clone());
        assert_eq!(sink.name(), "shared");
        let logger = Arc::new(Logger::local_only(LevelGate::default(), sink));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let logger = Arc::clone(&logger);
                thread::spawn(move || {
                    for i in 0..50 {
                        logger.log("worker", Level::Info, format_args!("thread {t} line {i}"));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 400);
        assert!(lines
            .iter()
            .all(|line| line.starts_with("worker [INFO] thread ") && line.contains(" line ")));
        assert_eq!(logger.snapshot().emitted_count, 400);
    }
}
