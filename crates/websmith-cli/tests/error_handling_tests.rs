//! Tests for error handling and suggestions.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_error_invalid_project_name_dotfile() {
    let mut cmd = Command::cargo_bin("websmith").unwrap();
    cmd.args(["new", ".hidden", "--yes"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_error_invalid_name_has_suggestions() {
    let mut cmd = Command::cargo_bin("websmith").unwrap();
    cmd.args(["new", ".hidden", "--yes"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Suggestions:"));
}

#[test]
fn test_error_missing_config_file() {
    let mut cmd = Command::cargo_bin("websmith").unwrap();
    cmd.args([
        "--config",
        "/definitely/not/here/websmith.toml",
        "new",
        "demo",
        "--yes",
    ]);

    cmd.assert().failure().code(4);
}

#[test]
fn test_error_unknown_subcommand() {
    let mut cmd = Command::cargo_bin("websmith").unwrap();
    cmd.arg("frobnicate");

    cmd.assert().failure().code(2);
}

#[test]
fn test_error_invalid_port_value() {
    let mut cmd = Command::cargo_bin("websmith").unwrap();
    cmd.args(["new", "demo", "--port", "not-a-port", "--yes"]);

    cmd.assert().failure().code(2);
}
