//! Integration tests for `configctl --action show`.

mod common;

use common::{configctl_cmd, write_file};
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    write_file(
        temp_dir.path(),
        "config.yaml",
        "APP_NAME: BaseApp\nAPP_PORT: 8080\n",
    );
    write_file(temp_dir.path(), "config-dev.yaml", "APP_PORT: 3000\n");
    temp_dir
}

/// Defaults read `config.yaml` in the working directory.
#[test]
fn test_show_defaults_to_config_yaml() {
    let temp_dir = fixture();

    let output = configctl_cmd(temp_dir.path())
        .assert()
        .success()
        .get_output()
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["APP_NAME"], "BaseApp");
    assert_eq!(json["APP_PORT"], 8080);
}

#[test]
fn test_show_applies_profile_overlay() {
    let temp_dir = fixture();

    let output = configctl_cmd(temp_dir.path())
        .env("APP_ENV", "dev")
        .args(["--action", "show"])
        .assert()
        .success()
        .get_output()
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["APP_NAME"], "BaseApp");
    assert_eq!(json["APP_PORT"], 3000);
}

#[test]
fn test_show_custom_env_var() {
    let temp_dir = fixture();

    configctl_cmd(temp_dir.path())
        .env("APP_ENV", "ignored")
        .env("_CONFIGCTL_PROFILE", "dev")
        .args(["--env", "_CONFIGCTL_PROFILE"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"APP_PORT\": 3000"));
}

#[test]
fn test_show_yaml_format() {
    let temp_dir = fixture();

    configctl_cmd(temp_dir.path())
        .args(["--format", "yaml"])
        .assert()
        .success()
        .stdout("APP_NAME: BaseApp\nAPP_PORT: 8080\n");
}

#[test]
fn test_show_dotenv_base() {
    let temp_dir = TempDir::new().unwrap();
    write_file(temp_dir.path(), ".env", "APP_DEBUG=true\nAPP_PORT=9000\n");

    let output = configctl_cmd(temp_dir.path())
        .args(["--conf", ".env"])
        .assert()
        .success()
        .get_output()
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["APP_DEBUG"], true);
    assert_eq!(json["APP_PORT"], 9000);
}
