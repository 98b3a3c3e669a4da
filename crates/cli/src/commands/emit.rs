//! `emit` command implementation.

use anyhow::Result;
use dispatcher::{Level, Logger};
use tracing::debug;

use crate::cli::EmitArgs;

use super::{load_config, open_local_sink};

/// Execute the `emit` command
pub async fn run_emit(args: &EmitArgs) -> Result<()> {
    let loaded = load_config(&args.logger)?;
    let local = open_local_sink(&args.logger)?;
    let logger = Logger::init(loaded, local);

    let level = Level::from(args.level.as_str());
    let message = args.message.join(" ");

    if args.remote {
        dispatcher::emit_remote!(logger, &args.module, level, "{message}").await;
    } else {
        logger.log(&args.module, level, format_args!("{message}"));
    }

    let snapshot = logger.snapshot();
    debug!(
        emitted = snapshot.emitted_count,
        discarded = snapshot.discarded_count,
        remote_attempts = snapshot.remote_attempts(),
        remote_failures = snapshot.remote_failure_count,
        "Emit finished"
    );

    Ok(())
}
