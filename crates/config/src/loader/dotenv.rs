//! Dotenv file loading.
//!
//! Responsibilities:
//! - Parse `KEY=VALUE` files with `dotenvy`.
//! - Export parsed pairs into the process environment as a separate step.
//!
//! Does NOT handle:
//! - Merging into the store (done by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Pairs are returned in file order so later lines win on merge.
//! - Errors never include raw line contents.

use std::path::Path;

use super::error::ConfigError;

/// Parses a dotenv file into raw pairs in file order.
pub(crate) fn read_dotenv(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| map_dotenv_error(path, e))?;
    iter.map(|item| item.map_err(|e| map_dotenv_error(path, e)))
        .collect()
}

fn map_dotenv_error(path: &Path, err: dotenvy::Error) -> ConfigError {
    match err {
        dotenvy::Error::LineParse(_, idx) => ConfigError::DotenvParse {
            path: path.to_path_buf(),
            error_index: idx,
        },
        dotenvy::Error::Io(io_err) => ConfigError::DotenvIo {
            path: path.to_path_buf(),
            kind: io_err.kind(),
        },
        _ => ConfigError::DotenvUnknown {
            path: path.to_path_buf(),
        },
    }
}

/// Writes every pair into the process environment, overwriting existing values.
pub fn export_to_process_env(pairs: &[(String, String)]) {
    for (key, value) in pairs {
        // SAFETY: configuration is loaded single-threaded during start-up,
        // before any thread that could read the environment concurrently.
        unsafe {
            std::env::set_var(key, value);
        }
    }
}
