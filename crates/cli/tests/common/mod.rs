//! Shared test utilities for configctl integration tests.
//!
//! Invariants / Assumptions:
//! - `APP_ENV` is cleared so the host profile never leaks into a test.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;

/// Returns a hermetic `configctl` command running inside `dir`.
pub fn configctl_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("configctl");
    cmd.current_dir(dir)
        .env_remove("APP_ENV")
        .env_remove("RUST_LOG");
    cmd
}

/// Writes `contents` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write fixture");
    path
}
