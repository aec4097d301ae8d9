//! Integration tests for the CLI surface.
//!
//! The dashboard itself needs a TTY, so these only cover the argument
//! handling clap gives us.

use std::process::Command;

/// Run the blinken binary and capture output.
fn run_blinken(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_blinken"))
        .args(args)
        .output()
        .expect("failed to execute blinken");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

#[test]
fn help_exits_0_and_shows_usage() {
    let (stdout, _stderr, exit_code) = run_blinken(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("Usage: blinken"));
    assert!(stdout.contains("color pairs"));
}

#[test]
fn version_reports_the_crate_version() {
    let (stdout, _stderr, exit_code) = run_blinken(&["--version"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unexpected_arguments_are_rejected() {
    let (_stdout, stderr, exit_code) = run_blinken(&["extra"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("error"));
}
