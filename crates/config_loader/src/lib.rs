//! # Config Loader
//!
//! Logger configuration loading.
//!
//! Responsibilities:
//! - Read the process environment once (`DEBUG`, `DEBUGVERBOSE`,
//!   `SLACKAPI_TOKEN`, `SLACK_CHANNEL`, `SLACK_API_URL`)
//! - Parse TOML/JSON configuration files
//! - Validate configuration legality
//! - Produce a `LoggerConfig` plus startup diagnostics
//!
//! # Example
//!
//! ```no_run
//! use config_loader::ConfigLoader;
//!
//! let loaded = ConfigLoader::from_env();
//! println!("remote enabled: {}", loaded.config.remote_enabled());
//! ```

mod parser;
mod validator;

pub use contracts::{LoadedConfig, LoggerConfig, RemoteConfig};
pub use parser::ConfigFormat;

use contracts::{
    ContractError, ENV_DEBUG, ENV_DEBUG_VERBOSE, ENV_SLACK_API_URL, ENV_SLACK_CHANNEL,
    ENV_SLACK_TOKEN,
};
use std::path::Path;
use tracing::debug;

/// Configuration loader
///
/// Provides static methods to load configuration from the environment,
/// files or strings.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the process environment
    ///
    /// Never fails: missing Slack variables disable the remote sink and are
    /// returned as diagnostics for the logger to report.
    pub fn from_env() -> LoadedConfig {
        Self::from_lookup(|key| {
            std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
        })
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// Debug flags are enabled by presence alone. Slack variables count as
    /// present only when non-empty.
    pub fn from_lookup<F>(lookup: F) -> LoadedConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        let debug = lookup(ENV_DEBUG).is_some();
        let debug_verbose = lookup(ENV_DEBUG_VERBOSE).is_some();

        let non_empty = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let token = non_empty(ENV_SLACK_TOKEN);
        let channel = non_empty(ENV_SLACK_CHANNEL);
        let api_url = non_empty(ENV_SLACK_API_URL);

        let mut diagnostics = Vec::new();
        if token.is_none() {
            diagnostics.push(ContractError::config_missing(ENV_SLACK_TOKEN));
        }
        if channel.is_none() {
            diagnostics.push(ContractError::config_missing(ENV_SLACK_CHANNEL));
        }

        let remote = match (&token, &channel) {
            (Some(token), Some(channel)) => Some(RemoteConfig {
                token: token.clone(),
                channel: channel.clone(),
                api_url,
            }),
            _ => None,
        };

        let mut config = LoggerConfig {
            debug,
            debug_verbose,
            remote,
        };

        // Token and channel are non-empty here; only the endpoint can be rejected
        if let Err(e) = validator::validate(&config) {
            diagnostics.push(e);
            if let Some(remote) = config.remote.as_mut() {
                remote.api_url = None;
            }
        }

        debug!(
            debug = config.debug,
            debug_verbose = config.debug_verbose,
            remote = config.remote_enabled(),
            diagnostics = diagnostics.len(),
            "Logger configuration read from environment"
        );

        LoadedConfig {
            config,
            diagnostics,
            supplied_token: token,
            supplied_channel: channel,
        }
    }

    /// Load configuration from file path
    ///
    /// Automatically detects format from file extension (.toml / .json).
    ///
    /// # Errors
    /// - File read failure
    /// - Unsupported format
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_path(path: &Path) -> Result<LoggerConfig, ContractError> {
        let format = Self::detect_format(path)?;
        let content = Self::read_file(path)?;
        Self::load_from_str(&content, format)
    }

    /// Load configuration from string
    ///
    /// # Errors
    /// - Parse failure
    /// - Validation failure
    pub fn load_from_str(content: &str, format: ConfigFormat) -> Result<LoggerConfig, ContractError> {
        Self::parse_and_validate(content, format)
    }

    /// Serialize LoggerConfig to TOML string (token omitted)
    pub fn to_toml(config: &LoggerConfig) -> Result<String, ContractError> {
        toml::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("TOML serialize error: {e}")))
    }

    /// Serialize LoggerConfig to JSON string (token omitted)
    pub fn to_json(config: &LoggerConfig) -> Result<String, ContractError> {
        serde_json::to_string_pretty(config)
            .map_err(|e| ContractError::config_parse(format!("JSON serialize error: {e}")))
    }
}

impl ConfigLoader {
    /// Infer configuration format from file extension
    fn detect_format(path: &Path) -> Result<ConfigFormat, ContractError> {
        let ext = path.extension().and_then(|e| e.to_str()).ok_or_else(|| {
            ContractError::config_parse("cannot determine file format from extension")
        })?;

        ConfigFormat::from_extension(ext).ok_or_else(|| {
            ContractError::config_parse(format!("unsupported config format: .{ext}"))
        })
    }

    /// Read configuration file content
    fn read_file(path: &Path) -> Result<String, ContractError> {
        Ok(std::fs::read_to_string(path)?)
    }

    /// Parse and validate configuration content
    fn parse_and_validate(content: &str, format: ConfigFormat) -> Result<LoggerConfig, ContractError> {
        let config = parser::parse(content, format)?;
        validator::validate(&config)?;
        Ok(config)
    }
}
