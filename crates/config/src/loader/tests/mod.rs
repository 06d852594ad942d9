//! Tests for the configuration loaders.
//!
//! Responsibilities:
//! - Test each source loader and its merge semantics.
//! - Test profile overlay resolution against real files.
//! - Test logger notifications.
//!
//! Invariants:
//! - Tests touching process environment use `serial_test` to prevent pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};


/// Writes `contents` to `dir/name` and returns the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
