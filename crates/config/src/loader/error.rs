//! Error types for configuration loading and projection.
//!
//! Responsibilities:
//! - Define error variants for every loader, export and projection failure.
//! - Wrap lower-level errors (I/O, decoders, `EncryptionError`) with path context.
//!
//! Does NOT handle:
//! - Cryptographic error classification (see `encryption.rs`).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, keys, rules).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use super::file::Format;
use crate::encryption::EncryptionError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} config at {path}: {message}")]
    Parse {
        path: PathBuf,
        format: Format,
        message: String,
    },

    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),

    #[error("unsupported encrypted file type: {0}")]
    UnsupportedEncryptedFileType(String),

    /// Failed to parse a `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error("Failed to parse .env file {path} at position {error_index}")]
    DotenvParse { path: PathBuf, error_index: usize },

    /// Failed to read a `.env` file due to an I/O error.
    #[error("Failed to read .env file {path}: {kind}")]
    DotenvIo { path: PathBuf, kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file {path}")]
    DotenvUnknown { path: PathBuf },

    #[error("Failed to decrypt {path}: {source}")]
    Encryption {
        path: PathBuf,
        #[source]
        source: EncryptionError,
    },

    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    #[error("Failed to deserialize configuration into target: {0}")]
    Deserialize(String),

    #[error("Invalid validation rule '{rule}' on field {field}")]
    InvalidRule { field: String, rule: String },

    #[error("validation failed: field {field} failed rule '{rule}': {message}")]
    Validation {
        field: String,
        rule: String,
        message: String,
    },
}

impl ConfigError {
    /// Returns true when the underlying cause is a missing file.
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigError::FileRead { source, .. } => source.kind() == ErrorKind::NotFound,
            ConfigError::DotenvIo { kind, .. } => *kind == ErrorKind::NotFound,
            _ => false,
        }
    }
}
