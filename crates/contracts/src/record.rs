//! LogRecord - a single formatted log call
//!
//! Created per call and consumed immediately; never stored.

use std::fmt;

use crate::Level;

/// Fence placed around the remote body so chat clients render it verbatim
const CODE_FENCE: &str = "```";

/// A formatted log call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Emitting module name
    pub module: String,
    /// Severity tag
    pub level: Level,
    /// Message with arguments already substituted
    pub message: String,
}

impl LogRecord {
    /// Format `args` into a new record
    pub fn new(module: impl Into<String>, level: Level, args: fmt::Arguments<'_>) -> Self {
        Self {
            module: module.into(),
            level,
            message: fmt::format(args),
        }
    }

    /// Build a record from an already formatted message
    pub fn with_message(module: impl Into<String>, level: Level, message: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            level,
            message: message.into(),
        }
    }

    /// Local sink line: `<module> [<level>] <message>`
    pub fn line(&self) -> String {
        format!("{} [{}] {}", self.module, self.level, self.message)
    }

    /// Remote body: the local line wrapped in a code block
    pub fn remote_body(&self) -> String {
        format!("{CODE_FENCE}{}{CODE_FENCE}", self.line())
    }
}
