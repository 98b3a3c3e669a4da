//! SlackClient - posts messages through the Slack Web API

use contracts::{ContractError, Delivery, RemoteConfig, RemoteMessage, RemoteSink};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};

const POST_MESSAGE_METHOD: &str = "chat.postMessage";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for SlackClient
#[derive(Clone)]
pub struct SlackClientConfig {
    /// Bot/user token
    pub token: String,
    /// API base URL, without trailing slash
    pub api_url: String,
    /// Request timeout
    pub timeout: Duration,
}

impl SlackClientConfig {
    /// Create config from remote settings
    pub fn from_remote(remote: &RemoteConfig) -> Self {
        Self {
            token: remote.token.clone(),
            api_url: remote.api_url().trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl std::fmt::Debug for SlackClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackClientConfig")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Request body of `chat.postMessage`
#[derive(Debug, Serialize)]
struct PostMessageRequest<'a> {
    channel: &'a str,
    text: &'a str,
    username: &'a str,
    as_user: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    escape: bool,
}

/// Response body of `chat.postMessage`
#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    ok: bool,
    #[serde(default)]
    channel: Option<String>,
    #[serde(default)]
    ts: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

/// Remote sink backed by the Slack Web API
///
/// Cloning shares the underlying connection pool.
#[derive(Clone)]
pub struct SlackClient {
    name: String,
    config: SlackClientConfig,
    http: reqwest::Client,
}

impl SlackClient {
    /// Create a new SlackClient
    pub fn new(name: impl Into<String>, config: SlackClientConfig) -> Result<Self, ContractError> {
        let name = name.into();
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("slacklog/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                ContractError::remote_transport(&name, format!("failed to create HTTP client: {e}"))
            })?;

        Ok(Self { name, config, http })
    }

    /// Create from remote settings
    pub fn from_remote(name: impl Into<String>, remote: &RemoteConfig) -> Result<Self, ContractError> {
        Self::new(name, SlackClientConfig::from_remote(remote))
    }

    fn endpoint(&self) -> String {
        format!("{}/{POST_MESSAGE_METHOD}", self.config.api_url)
    }

    fn interpret(&self, response: PostMessageResponse) -> Result<Delivery, ContractError> {
        if !response.ok {
            let reason = response.error.unwrap_or_else(|| "unknown_error".to_string());
            return Err(ContractError::remote_rejected(&self.name, reason));
        }

        Ok(Delivery {
            channel_id: response.channel.unwrap_or_default(),
            timestamp: response.ts.unwrap_or_default(),
        })
    }
}

/// Escape the three characters Slack treats as control sequences
fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl RemoteSink for SlackClient {
    fn name(&self) -> &str {
        &self.name
    }

    #[instrument(
        name = "slack_post_message",
        skip(self, message),
        fields(sink = %self.name, user = %message.username)
    )]
    async fn post_message(
        &self,
        destination: &str,
        message: &RemoteMessage,
    ) -> Result<Delivery, ContractError> {
        let text = if message.escape_text {
            escape_text(&message.text)
        } else {
            message.text.clone()
        };

        let body = PostMessageRequest {
            channel: destination,
            text: &text,
            username: &message.username,
            as_user: message.as_user,
            escape: message.escape_text,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContractError::remote_transport(&self.name, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContractError::remote_transport(
                &self.name,
                format!("HTTP {status}"),
            ));
        }

        let parsed: PostMessageResponse = response
            .json()
            .await
            .map_err(|e| ContractError::remote_transport(&self.name, format!("bad response: {e}")))?;

        let delivery = self.interpret(parsed)?;
        debug!(
            sink = %self.name,
            channel = %delivery.channel_id,
            ts = %delivery.timestamp,
            "Slack message posted"
        );
        Ok(delivery)
    }
}
