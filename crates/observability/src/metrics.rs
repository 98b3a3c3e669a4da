//! Logger metrics
//!
//! Counters published through the `metrics` facade; a no-op until a
//! recorder (e.g. the Prometheus exporter) is installed.

use metrics::{counter, histogram};

/// Record a record passing through the level gate
pub fn record_line(level: &str, emitted: bool) {
    let status = if emitted { "emitted" } else { "discarded" };
    counter!(
        "slacklog_lines_total",
        "level" => level.to_string(),
        "status" => status
    )
    .increment(1);
}

/// Record a remote post attempt
pub fn record_remote_post(sink_name: &str, success: bool) {
    let status = if success { "success" } else { "failure" };
    counter!(
        "slacklog_remote_posts_total",
        "sink" => sink_name.to_string(),
        "status" => status
    )
    .increment(1);
}

/// Record remote round-trip latency
pub fn record_remote_latency_ms(sink_name: &str, latency_ms: f64) {
    histogram!(
        "slacklog_remote_latency_ms",
        "sink" => sink_name.to_string()
    )
    .record(latency_ms);
}
