//! System environment variable access.
//!
//! Responsibilities:
//! - Read single environment variables into the store.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - A variable merged by `apply_sys_env` is key-normalized only: the stored
//!   value is the uppercased raw string, never type-coerced.
//! - Absent variables are skipped silently.
//! - Non-UTF-8 values are stored lossily rather than skipped.

use crate::store::Store;
use crate::value::{Value, normalize_key};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Merges one process environment variable into `store`.
///
/// Values that are not valid UTF-8 are converted lossily.
/// Returns whether the variable was present.
pub(crate) fn apply_sys_env(store: &mut Store, name: &str) -> bool {
    match std::env::var_os(name) {
        Some(raw) => {
            let raw = raw.to_string_lossy();
            store.set_raw(name, Value::String(normalize_key(&raw)));
            true
        }
        None => false,
    }
}
