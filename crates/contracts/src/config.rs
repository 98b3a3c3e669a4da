//! LoggerConfig - Config Loader output
//!
//! Process-wide logger settings, read once at startup and immutable afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use crate::ContractError;

/// Presence enables DEBUG lines
pub const ENV_DEBUG: &str = "DEBUG";
/// Presence enables DEBUGVERBOSE (and DEBUG) lines
pub const ENV_DEBUG_VERBOSE: &str = "DEBUGVERBOSE";
/// Slack application token with write access to the channel
pub const ENV_SLACK_TOKEN: &str = "SLACKAPI_TOKEN";
/// Slack destination channel
pub const ENV_SLACK_CHANNEL: &str = "SLACK_CHANNEL";
/// Optional Slack API base URL override
pub const ENV_SLACK_API_URL: &str = "SLACK_API_URL";

/// Default Slack Web API base URL
pub const DEFAULT_SLACK_API_URL: &str = "https://slack.com/api";

/// Logger configuration
///
/// `remote` is `Some` exactly when both a token and a channel were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct LoggerConfig {
    /// DEBUG emission enabled
    #[serde(default)]
    pub debug: bool,

    /// DEBUGVERBOSE emission enabled (also enables DEBUG)
    #[serde(default)]
    pub debug_verbose: bool,

    /// Remote sink settings (None = local only)
    #[serde(default)]
    #[validate(nested)]
    pub remote: Option<RemoteConfig>,
}

impl LoggerConfig {
    /// Local-only configuration with the given debug flags
    pub fn local(debug: bool, debug_verbose: bool) -> Self {
        Self {
            debug,
            debug_verbose,
            remote: None,
        }
    }

    /// Attach remote settings
    pub fn with_remote(mut self, remote: RemoteConfig) -> Self {
        self.remote = Some(remote);
        self
    }

    /// Whether the remote sink is enabled
    pub fn remote_enabled(&self) -> bool {
        self.remote.is_some()
    }
}

/// Configuration plus the startup diagnostics gathered while reading it
#[derive(Default)]
pub struct LoadedConfig {
    pub config: LoggerConfig,
    /// Non-fatal problems (e.g. missing variables) to report once at init
    pub diagnostics: Vec<ContractError>,
    /// Slack token as supplied, even when the remote sink stays disabled
    pub supplied_token: Option<String>,
    /// Slack channel as supplied, even when the remote sink stays disabled
    pub supplied_channel: Option<String>,
}

impl LoadedConfig {
    /// Configuration without diagnostics
    pub fn clean(config: LoggerConfig) -> Self {
        let (supplied_token, supplied_channel) = match &config.remote {
            Some(remote) => (Some(remote.token.clone()), Some(remote.channel.clone())),
            None => (None, None),
        };
        Self {
            config,
            diagnostics: Vec::new(),
            supplied_token,
            supplied_channel,
        }
    }
}

impl fmt::Debug for LoadedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadedConfig")
            .field("config", &self.config)
            .field("diagnostics", &self.diagnostics)
            .field("supplied_token", &self.supplied_token.as_deref().map(redact))
            .field("supplied_channel", &self.supplied_channel)
            .finish()
    }
}

/// Remote (Slack) sink settings
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct RemoteConfig {
    /// API token, never serialized back out
    #[serde(skip_serializing, default)]
    #[validate(length(min = 1, message = "token must not be empty"))]
    pub token: String,

    /// Destination channel
    #[validate(length(min = 1, message = "channel must not be empty"))]
    pub channel: String,

    /// API base URL override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(url)]
    pub api_url: Option<String>,
}

impl RemoteConfig {
    pub fn new(token: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            channel: channel.into(),
            api_url: None,
        }
    }

    /// Effective API base URL
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_SLACK_API_URL)
    }

    /// Token with everything but a short prefix masked
    pub fn redacted_token(&self) -> String {
        redact(&self.token)
    }
}

impl fmt::Debug for RemoteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RemoteConfig")
            .field("token", &self.redacted_token())
            .field("channel", &self.channel)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// Mask a secret, keeping at most the first four characters
pub fn redact(secret: &str) -> String {
    if secret.is_empty() {
        return String::new();
    }
    let visible: String = secret.chars().take(4).collect();
    format!("{visible}****")
}
