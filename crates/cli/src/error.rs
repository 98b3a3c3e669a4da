//! Error types for CLI operations.

use std::path::PathBuf;
use thiserror::Error;

/// CLI-specific error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file not found
    #[error("Configuration file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// Configuration parse or validation error
    #[error("Failed to load configuration from {}: {source}", path.display())]
    ConfigLoad {
        path: PathBuf,
        #[source]
        source: contracts::ContractError,
    },

    /// Local sink could not be opened
    #[error("Failed to open log file {}: {source}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `--sink file` without `--log-file`
    #[error("--log-file is required for the file sink")]
    MissingLogFile,
}

impl CliError {
    pub fn config_not_found(path: impl Into<PathBuf>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    pub fn config_load(path: impl Into<PathBuf>, source: contracts::ContractError) -> Self {
        Self::ConfigLoad {
            path: path.into(),
            source,
        }
    }

    pub fn sink_open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SinkOpen {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
