//! Structured (JSON/YAML) file loading.
//!
//! Responsibilities:
//! - Select a decoder from a file's extension.
//! - Decode a top-level object/mapping into flat key-value pairs.
//! - Merge decoded pairs into a `Store`.
//!
//! Does NOT handle:
//! - Profile overlays (see `profile.rs`).
//! - Decryption (see `encrypted.rs`).
//!
//! Invariants:
//! - Extensions are matched ASCII case-insensitively.
//! - Nested values are kept whole as `Value::Opaque`; nothing is flattened.
//! - A failed load leaves the store untouched.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::ConfigError;
use crate::store::Store;
use crate::value::Value;

type Map = serde_json::Map<String, serde_json::Value>;

/// Decoders supported for structured configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Maps a lowercase extension (with its leading dot) to a decoder.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            ".json" => Some(Format::Json),
            ".yaml" | ".yml" => Some(Format::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => f.write_str("JSON"),
            Format::Yaml => f.write_str("YAML"),
        }
    }
}

/// Returns the lowercase extension of `path`'s file name, including the dot.
///
/// Everything from the last `.` counts, so `.env` yields `.env` and
/// `config` yields an empty string.
pub(crate) fn extension_of(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    match name.rfind('.') {
        Some(idx) => name[idx..].to_ascii_lowercase(),
        None => String::new(),
    }
}

/// Decodes a top-level object/mapping into raw (un-normalized) pairs.
pub(crate) fn decode_map(
    format: Format,
    bytes: &[u8],
    path: &Path,
) -> Result<Vec<(String, Value)>, ConfigError> {
    let decoded = match format {
        Format::Json => decode_json(bytes),
        Format::Yaml => decode_yaml(bytes),
    };
    let map = decoded.map_err(|message| ConfigError::Parse {
        path: path.to_path_buf(),
        format,
        message,
    })?;

    Ok(map
        .into_iter()
        .map(|(k, v)| (k, Value::from_raw(v)))
        .collect())
}

fn decode_json(bytes: &[u8]) -> Result<Map, String> {
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}

fn decode_yaml(bytes: &[u8]) -> Result<Map, String> {
    // An empty YAML document is an empty mapping.
    if bytes.trim_ascii().is_empty() {
        return Ok(Map::new());
    }
    serde_yaml::from_slice::<Option<Map>>(bytes)
        .map(Option::unwrap_or_default)
        .map_err(|e| e.to_string())
}

/// Reads `path`, decodes it by extension and merges it into `store`.
///
/// Returns the number of keys merged.
pub(crate) fn apply_file(store: &mut Store, path: &Path) -> Result<usize, ConfigError> {
    let bytes = std::fs::read(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = extension_of(path);
    let Some(format) = Format::from_extension(&ext) else {
        return Err(ConfigError::UnsupportedFileType(ext));
    };

    let pairs = decode_map(format, &bytes, path)?;
    let merged = store.merge(pairs);

    tracing::debug!(path = %path.display(), %format, keys = merged, "Merged config file");
    Ok(merged)
}

/// Placeholder path used in errors for in-memory documents.
pub(crate) fn inline_path() -> PathBuf {
    PathBuf::from("<inline>")
}
