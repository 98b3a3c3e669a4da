//! Sink traits - Dispatcher output interfaces
//!
//! `LocalSink` receives rendered lines synchronously; `RemoteSink` is the
//! narrow "post message" capability of the chat destination.

use crate::{ContractError, Level};

/// Local output destination (stderr, a file, the tracing pipeline)
///
/// Shared across threads; implementations serialize their own writes.
pub trait LocalSink: Send + Sync {
    /// Sink name (used for diagnostics)
    fn name(&self) -> &str;

    /// Write one rendered line, without trailing newline
    fn write_line(&self, level: &Level, line: &str);
}

impl<S: LocalSink + ?Sized> LocalSink for std::sync::Arc<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn write_line(&self, level: &Level, line: &str) {
        (**self).write_line(level, line)
    }
}

/// Message posted to the remote sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteMessage {
    /// Body text (already fenced)
    pub text: String,
    /// Display name the post is attributed to
    pub username: String,
    /// Escape markup characters in `text`
    pub escape_text: bool,
    /// Post as the authenticated user
    pub as_user: bool,
}

impl RemoteMessage {
    /// Unescaped message posted as the authenticated user
    pub fn new(text: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            username: username.into(),
            escape_text: false,
            as_user: true,
        }
    }
}

/// Delivery confirmation from the remote sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Channel ID the message landed in
    pub channel_id: String,
    /// Remote timestamp of the posted message
    pub timestamp: String,
}

/// Remote "post message" capability
///
/// Must be safe for concurrent use by multiple callers.
#[trait_variant::make(RemoteSink: Send)]
pub trait LocalRemoteSink {
    /// Sink name (used for diagnostics)
    fn name(&self) -> &str;

    /// Post `message` to `destination`
    ///
    /// # Errors
    /// Returns transport/auth failures (should include context)
    async fn post_message(
        &self,
        destination: &str,
        message: &RemoteMessage,
    ) -> Result<Delivery, ContractError>;
}
