//! Layered error definitions
//!
//! Categorized by source: config / remote / io

use thiserror::Error;

/// Unified error type
#[derive(Debug, Error)]
pub enum ContractError {
    // ===== Configuration Errors =====
    /// Configuration parse error
    #[error("config parse error: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Configuration validation error
    #[error("config validation error at '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    /// Required environment variable absent
    #[error("{variable} env variable not set")]
    ConfigMissing { variable: String },

    // ===== Remote Sink Errors =====
    /// Transport failure talking to the remote sink
    #[error("remote sink '{sink_name}' transport error: {message}")]
    RemoteTransport { sink_name: String, message: String },

    /// Remote sink answered but rejected the post
    #[error("remote sink '{sink_name}' rejected message: {reason}")]
    RemoteRejected { sink_name: String, reason: String },

    // ===== General Errors =====
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ContractError {
    /// Create configuration parse error
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
            source: None,
        }
    }

    /// Create configuration validation error
    pub fn config_validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConfigValidation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create missing-variable error
    pub fn config_missing(variable: impl Into<String>) -> Self {
        Self::ConfigMissing {
            variable: variable.into(),
        }
    }

    /// Create remote transport error
    pub fn remote_transport(sink_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RemoteTransport {
            sink_name: sink_name.into(),
            message: message.into(),
        }
    }

    /// Create remote rejection error
    pub fn remote_rejected(sink_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RemoteRejected {
            sink_name: sink_name.into(),
            reason: reason.into(),
        }
    }
}
