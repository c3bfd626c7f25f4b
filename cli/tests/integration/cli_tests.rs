//! Integration tests for the CLI surface: help, version and global flags.

#![allow(clippy::expect_used)]

use predicates::prelude::*;

use crate::helpers::{Sandbox, stdout_json};

#[test]
fn test_cli_no_args_shows_help_and_exits_two() {
    // an env-provided flag counts as an argument, so keep NO_COLOR out
    Sandbox::new()
        .agentforge()
        .env_remove("NO_COLOR")
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "Validate, instantiate and store AI agent definitions",
        ));
}

#[test]
fn test_cli_help_lists_commands() {
    Sandbox::new()
        .agentforge()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("templates"));
}

#[test]
fn test_cli_version_flag() {
    Sandbox::new()
        .agentforge()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agentforge"));
}

#[test]
fn test_version_command() {
    Sandbox::new()
        .agentforge()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "agentforge {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_command_json() {
    let output = Sandbox::new()
        .agentforge()
        .args(["version", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["version"], env!("CARGO_PKG_VERSION"));
}

#[test]
fn test_unknown_subcommand_fails() {
    Sandbox::new()
        .agentforge()
        .arg("frobnicate")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_quiet_suppresses_version() {
    Sandbox::new()
        .agentforge()
        .args(["--quiet", "version"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let sandbox = Sandbox::new();
    let output = sandbox
        .agentforge()
        .args(["-v", "--json", "blocks", "list"])
        .output()
        .expect("run");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("catalog ready"));
    // stdout is still a clean JSON document
    assert!(stdout_json(&output).is_array());
}

#[test]
fn test_no_color_env_accepts_conventional_values() {
    for value in ["1", "yes", "", "0", "false"] {
        Sandbox::new()
            .agentforge()
            .env("NO_COLOR", value)
            .arg("version")
            .assert()
            .success()
            .stdout(predicate::str::contains("agentforge"));
    }
}

#[test]
fn test_no_color_output_has_no_escape_codes() {
    Sandbox::new()
        .agentforge()
        .env("NO_COLOR", "1")
        .args(["blocks", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}
