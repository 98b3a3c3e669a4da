//! # slacklog CLI
//!
//! Command-line entry point.
//!
//! Provides:
//! - one-shot emission of a log line (optionally mirrored to Slack)
//! - inspection of the resolved logger configuration

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use cli::{Cli, Commands};
use commands::{run_check, run_emit};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    init_observability(&cli)?;

    debug!(version = env!("CARGO_PKG_VERSION"), "slacklog starting");

    // Errors are printed once, by the `Result` returned from `main`
    match &cli.command {
        Commands::Emit(args) => run_emit(args).await,
        Commands::Check(args) => run_check(args),
    }
}

/// Initialize internal diagnostics based on CLI options
fn init_observability(cli: &Cli) -> Result<()> {
    let default_log_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    };

    observability::init_with_config(observability::ObservabilityConfig {
        log_format: cli.log_format.clone().into(),
        metrics_port: cli.metrics_port,
        // Lines routed through `--sink tracing` are never filtered by verbosity
        default_log_level: format!("{default_log_level},dispatcher::sinks::log=trace"),
    })
}
