//! Severity level tags
//!
//! A closed set of tags with distinct handling, not an ordered scale.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity level of a log record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Level {
    /// Emit, then unwind the caller
    Panic,
    /// Emit, then exit the process
    Fatal,
    Err,
    Warn,
    Info,
    /// Emitted when either debug flag is set
    Debug,
    /// Emitted only when the verbose debug flag is set
    DebugVerbose,
    /// Any other caller-supplied tag, always emitted
    Other(String),
}

impl Level {
    /// Tag as rendered inside the brackets of a log line
    pub fn as_str(&self) -> &str {
        match self {
            Self::Panic => "PANIC",
            Self::Fatal => "FATAL",
            Level::Err => "ERR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::DebugVerbose => "DEBUGVERBOSE",
            Self::Other(tag) => tag,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// `Level::Err` shares its name with `FromStr::Err`, so variants are spelled out.
impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        let level = match s.to_ascii_uppercase().as_str() {
            "PANIC" => Level::Panic,
            "FATAL" => Level::Fatal,
            "ERR" | "ERROR" => Level::Err,
            "WARN" | "WARNING" => Level::Warn,
            "INFO" => Level::Info,
            "DEBUG" => Level::Debug,
            "DEBUGVERBOSE" | "DEBUG_VERBOSE" => Level::DebugVerbose,
            _ => Level::Other(s.to_string()),
        };
        Ok(level)
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        match s.parse::<Level>() {
            Ok(level) => level,
            Err(never) => match never {},
        }
    }
}

impl From<String> for Level {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<Level> for String {
    fn from(level: Level) -> Self {
        level.as_str().to_string()
    }
}
