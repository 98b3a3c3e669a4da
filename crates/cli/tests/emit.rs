//! Process-level behaviour of `slacklog emit`

use assert_cmd::Command;
use predicates::prelude::*;

const CLEARED_VARS: &[&str] = &[
    "DEBUG",
    "DEBUGVERBOSE",
    "SLACKAPI_TOKEN",
    "SLACK_CHANNEL",
    "SLACK_API_URL",
    "SLACKLOG_VERBOSE",
    "SLACKLOG_CONFIG",
    "SLACKLOG_SINK",
    "SLACKLOG_FILE",
    "SLACKLOG_TIMESTAMPS",
    "RUST_LOG",
];

/// `slacklog emit` with a clean logger environment
fn emit(module: &str, level: &str, message: &str) -> Command {
    let mut cmd = Command::cargo_bin("slacklog").unwrap();
    for var in CLEARED_VARS {
        cmd.env_remove(var);
    }
    cmd.args(["emit", "-m", module, "-l", level, message]);
    cmd
}

#[test]
fn test_info_line_written_to_stderr() {
    emit("api", "INFO", "started on port 8080")
        .assert()
        .success()
        .stderr(predicate::str::contains("api [INFO] started on port 8080"))
        .stderr(predicate::str::contains(
            "logger [ERR] SLACKAPI_TOKEN env variable not set",
        ));
}

#[test]
fn test_debug_line_hidden_without_flag() {
    emit("api", "DEBUG", "cache miss")
        .assert()
        .success()
        .stderr(predicate::str::contains("cache miss").not());
}

#[test]
fn test_debug_line_shown_with_flag() {
    emit("api", "DEBUG", "cache miss")
        .env("DEBUG", "")
        .assert()
        .success()
        .stderr(predicate::str::contains("api [DEBUG] cache miss"));
}

#[test]
fn test_fatal_exits_with_code_one_after_line() {
    emit("api", "FATAL", "disk gone")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("api [FATAL] disk gone"));
}

#[test]
fn test_panic_unwinds_with_rendered_line() {
    emit("core", "PANIC", "invariant broken")
        .assert()
        .code(101)
        .stderr(predicate::str::contains("core [PANIC] invariant broken"));
}

#[test]
fn test_fatal_still_exits_when_remote_disabled() {
    emit("api", "FATAL", "disk gone")
        .arg("--remote")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("api [FATAL] disk gone"));
}
