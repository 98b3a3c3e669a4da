//! Dispatcher error types

use contracts::ContractError;
use thiserror::Error;

/// Logger construction errors
///
/// Logging calls themselves never return errors.
#[derive(Debug, Error)]
pub enum DispatcherError {
    /// The remote client could not be built
    #[error("failed to create remote sink '{sink_name}': {source}")]
    RemoteClient {
        sink_name: String,
        #[source]
        source: ContractError,
    },
}

impl DispatcherError {
    pub fn remote_client(sink_name: impl Into<String>, source: ContractError) -> Self {
        Self::RemoteClient {
            sink_name: sink_name.into(),
            source,
        }
    }
}
