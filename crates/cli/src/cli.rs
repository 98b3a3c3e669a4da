//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// slacklog - leveled logging with an optional Slack mirror
#[derive(Parser, Debug)]
#[command(
    name = "slacklog",
    author,
    version,
    about = "Leveled logger that can mirror lines to a Slack channel",
    long_about = "Formats `<module> [<LEVEL>] <message>` lines, gates DEBUG output behind the \n\
                  DEBUG / DEBUGVERBOSE environment flags, and mirrors lines to Slack when \n\
                  SLACKAPI_TOKEN and SLACK_CHANNEL are set."
)]
pub struct Cli {
    /// Increase internal diagnostics (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "SLACKLOG_VERBOSE")]
    pub verbose: u8,

    /// Suppress internal diagnostics except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Internal diagnostics format
    #[arg(
        long,
        value_enum,
        default_value = "compact",
        global = true,
        env = "SLACKLOG_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    /// Prometheus metrics port (disabled when unset)
    #[arg(long, global = true, env = "SLACKLOG_METRICS_PORT")]
    pub metrics_port: Option<u16>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Emit one log line
    Emit(EmitArgs),

    /// Show the resolved logger configuration
    Check(CheckArgs),
}

/// Where the logger configuration comes from and where lines go
#[derive(Args, Debug, Clone)]
pub struct LoggerArgs {
    /// Configuration file (TOML or JSON); environment variables when omitted
    #[arg(short, long, env = "SLACKLOG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Local sink
    #[arg(long, value_enum, default_value = "stderr", env = "SLACKLOG_SINK")]
    pub sink: SinkKind,

    /// File path for the `file` sink
    #[arg(long, required_if_eq("sink", "file"), env = "SLACKLOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Prefix lines with the local date and time
    #[arg(long, env = "SLACKLOG_TIMESTAMPS")]
    pub timestamps: bool,
}

/// Arguments for the `emit` command
#[derive(Parser, Debug, Clone)]
pub struct EmitArgs {
    #[command(flatten)]
    pub logger: LoggerArgs,

    /// Module name shown before the level tag
    #[arg(short, long, default_value = "main")]
    pub module: String,

    /// Level tag (PANIC, FATAL, ERR, WARN, INFO, DEBUG, DEBUGVERBOSE or any other tag)
    #[arg(short, long, default_value = "INFO")]
    pub level: String,

    /// Also mirror the line to Slack when configured
    #[arg(long)]
    pub remote: bool,

    /// Message words, joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub message: Vec<String>,
}

/// Arguments for the `check` command
#[derive(Parser, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub logger: LoggerArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Local sink selection
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SinkKind {
    /// Standard error
    #[default]
    Stderr,
    /// Append to --log-file
    File,
    /// Re-emit through the tracing subscriber
    Tracing,
}

/// Internal diagnostics format
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    Pretty,
    /// Compact single-line format
    #[default]
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => Self::Json,
            LogFormat::Pretty => Self::Pretty,
            LogFormat::Compact => Self::Compact,
        }
    }
}
