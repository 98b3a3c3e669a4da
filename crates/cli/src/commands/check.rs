//! `check` command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use contracts::LoadedConfig;

use crate::cli::CheckArgs;

use super::load_config;

/// Resolved configuration for output
#[derive(Serialize)]
struct ConfigReport {
    source: String,
    debug: bool,
    debug_verbose: bool,
    remote_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    remote: Option<RemoteReport>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    diagnostics: Vec<String>,
}

#[derive(Serialize)]
struct RemoteReport {
    channel: String,
    api_url: String,
    token: String,
}

/// Execute the `check` command
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let loaded = load_config(&args.logger)?;
    let source = match &args.logger.config {
        Some(path) => path.display().to_string(),
        None => "environment".to_string(),
    };
    info!(source = %source, "Checking logger configuration");

    let report = build_report(source, &loaded);

    if args.json {
        let json =
            serde_json::to_string_pretty(&report).context("Failed to serialize config report")?;
        println!("{}", json);
    } else {
        print_report(&report);
    }

    Ok(())
}

fn build_report(source: String, loaded: &LoadedConfig) -> ConfigReport {
    let config = &loaded.config;
    ConfigReport {
        source,
        debug: config.debug,
        debug_verbose: config.debug_verbose,
        remote_enabled: config.remote_enabled(),
        remote: config.remote.as_ref().map(|remote| RemoteReport {
            channel: remote.channel.clone(),
            api_url: remote.api_url().to_string(),
            token: remote.redacted_token(),
        }),
        diagnostics: loaded.diagnostics.iter().map(|e| e.to_string()).collect(),
    }
}

fn print_report(report: &ConfigReport) {
    println!("Configuration source: {}", report.source);
    println!("  DEBUG lines:         {}", on_off(report.debug || report.debug_verbose));
    println!("  DEBUGVERBOSE lines:  {}", on_off(report.debug_verbose));
    match &report.remote {
        Some(remote) => {
            println!("  Slack mirror:        on");
            println!("    channel: {}", remote.channel);
            println!("    api url: {}", remote.api_url);
            println!("    token:   {}", remote.token);
        }
        None => println!("  Slack mirror:        off"),
    }
    for diagnostic in &report.diagnostics {
        println!("  ! {}", diagnostic);
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled {
        "on"
    } else {
        "off"
    }
}
