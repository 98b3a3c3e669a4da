//! LogSink - forwards lines to the tracing pipeline

use contracts::{Level, LocalSink};
use tracing::{debug, error, info, trace, warn};

/// Local sink that re-emits each line as a tracing event
///
/// The line is the event message; the tag is mapped onto the nearest
/// tracing level so `RUST_LOG` filtering keeps working.
pub struct LogSink {
    name: String,
}

impl LogSink {
    /// Create a new LogSink with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl LocalSink for LogSink {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_line(&self, level: &Level, line: &str) {
        match level {
            Level::Panic | Level::Fatal | Level::Err => error!(sink = %self.name, "{line}"),
            Level::Warn => warn!(sink = %self.name, "{line}"),
            Level::Info | Level::Other(_) => info!(sink = %self.name, "{line}"),
            Level::Debug => debug!(sink = %self.name, "{line}"),
            Level::DebugVerbose => trace!(sink = %self.name, "{line}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_sink_write() {
        let sink = LogSink::new("test_log");
        sink.write_line(&Level::Warn, "api [WARN] slow");
        sink.write_line(&Level::from("AUDIT"), "api [AUDIT] login");
    }

    #[test]
    fn test_log_sink_name() {
        let sink = LogSink::new("my_logger");
        assert_eq!(sink.name(), "my_logger");
    }
}
