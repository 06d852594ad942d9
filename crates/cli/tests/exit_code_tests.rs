//! Integration tests for exit codes and error output.

mod common;

use common::{configctl_cmd, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_unknown_action_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "config.yaml", "APP_NAME: BaseApp\n");

    configctl_cmd(temp_dir.path())
        .args(["--action", "validate"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unknown action: validate"));
}

#[test]
fn test_missing_config_exits_1() {
    let temp_dir = TempDir::new().unwrap();

    configctl_cmd(temp_dir.path())
        .args(["--conf", "missing.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to load missing.yaml"));
}

#[test]
fn test_unsupported_extension_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "config.toml", "a = 1\n");

    configctl_cmd(temp_dir.path())
        .args(["--conf", "config.toml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("unsupported file type: .toml"));
}

#[test]
fn test_malformed_config_exits_1() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), "config.json", "{ not json");

    configctl_cmd(temp_dir.path())
        .args(["--conf", "config.json"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse JSON config"));
}

#[test]
fn test_bad_format_is_usage_error() {
    let temp_dir = TempDir::new().unwrap();

    configctl_cmd(temp_dir.path())
        .args(["--format", "xml"])
        .assert()
        .code(2);
}
