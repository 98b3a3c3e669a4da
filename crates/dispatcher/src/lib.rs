//! # Dispatcher
//!
//! Leveled logging with an optional Slack mirror.
//!
//! Responsibilities:
//! - Gate records by severity tag and the two debug flags
//! - Write `<module> [<LEVEL>] <message>` lines to a local sink
//! - Mirror `log_remote` calls to the remote sink, reporting failures locally
//! - Turn PANIC / FATAL into unwinding / process exit, after emission

pub mod dispatcher;
pub mod error;
pub mod gate;
mod macros;
pub mod metrics;
pub mod sinks;

pub use contracts::{Level, LocalSink, LogRecord, LoggerConfig, RemoteSink};
pub use dispatcher::{Logger, RemoteTarget, LOGGER_MODULE};
pub use error::DispatcherError;
pub use gate::{LevelGate, Outcome, Verdict};
pub use metrics::{DispatchMetrics, MetricsSnapshot};
pub use sinks::{LogSink, MemorySink, SlackClient, SlackClientConfig, WriterSink};
