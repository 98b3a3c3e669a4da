//! Command implementations.

mod check;
mod emit;

pub use check::run_check;
pub use emit::run_emit;

use std::sync::Arc;

use config_loader::{ConfigLoader, LoadedConfig};
use dispatcher::{LocalSink, LogSink, WriterSink};
use tracing::debug;

use crate::cli::{LoggerArgs, SinkKind};
use crate::error::{CliError, Result};

/// Load configuration from `--config` or the environment
pub(crate) fn load_config(args: &LoggerArgs) -> Result<LoadedConfig> {
    match &args.config {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::config_not_found(path));
            }
            let config = ConfigLoader::load_from_path(path)
                .map_err(|e| CliError::config_load(path, e))?;
            debug!(config = %path.display(), "Logger configuration loaded from file");
            Ok(LoadedConfig::clean(config))
        }
        None => Ok(ConfigLoader::from_env()),
    }
}

/// Build the local sink selected by `--sink`
pub(crate) fn open_local_sink(args: &LoggerArgs) -> Result<Arc<dyn LocalSink>> {
    let sink: Arc<dyn LocalSink> = match args.sink {
        SinkKind::Stderr => Arc::new(WriterSink::stderr("stderr").with_timestamps(args.timestamps)),
        SinkKind::File => {
            let path = args.log_file.as_ref().ok_or(CliError::MissingLogFile)?;
            let sink = WriterSink::append("file", path)
                .map_err(|e| CliError::sink_open(path, e))?;
            Arc::new(sink.with_timestamps(args.timestamps))
        }
        SinkKind::Tracing => Arc::new(LogSink::new("tracing")),
    };
    Ok(sink)
}
