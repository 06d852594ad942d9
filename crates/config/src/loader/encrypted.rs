//! Encrypted configuration file loading.
//!
//! Responsibilities:
//! - Read a base64 AES-256-GCM envelope and decrypt it with a secret.
//! - Pick the plaintext decoder from the compound suffix (`.json.enc`, `.yaml.enc`, `.yml.enc`).
//!
//! Does NOT handle:
//! - Cipher details or key derivation (see `encryption.rs`).
//!
//! Invariants:
//! - The suffix is only inspected after decryption succeeds.
//! - Plaintext is never logged or included in errors.

use secrecy::SecretString;
use std::path::Path;

use super::error::ConfigError;
use super::file::{Format, decode_map, extension_of};
use crate::constants::{ENCRYPTED_JSON_SUFFIX, ENCRYPTED_YAML_SUFFIX, ENCRYPTED_YML_SUFFIX};
use crate::encryption::decrypt_blob;
use crate::store::Store;

const ENCRYPTED_SUFFIXES: &[(&str, Format)] = &[
    (ENCRYPTED_JSON_SUFFIX, Format::Json),
    (ENCRYPTED_YAML_SUFFIX, Format::Yaml),
    (ENCRYPTED_YML_SUFFIX, Format::Yaml),
];

/// Selects the plaintext decoder for an encrypted file by its compound suffix.
pub(crate) fn encrypted_format(path: &Path) -> Result<Format, ConfigError> {
    let name = path.to_string_lossy().to_ascii_lowercase();
    for (suffix, format) in ENCRYPTED_SUFFIXES {
        if name.ends_with(suffix) {
            return Ok(*format);
        }
    }
    let ext = extension_of(path);
    Err(ConfigError::UnsupportedEncryptedFileType(ext))
}

/// Decrypts `path` with `secret` and merges the decoded mapping into `store`.
///
/// Returns the number of keys merged.
pub(crate) fn apply_encrypted_file(
    store: &mut Store,
    path: &Path,
    secret: &SecretString,
) -> Result<usize, ConfigError> {
    let encoded = std::fs::read(path).map_err(|source| ConfigError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let plaintext = decrypt_blob(&encoded, secret).map_err(|source| ConfigError::Encryption {
        path: path.to_path_buf(),
        source,
    })?;

    let format = encrypted_format(path)?;
    let pairs = decode_map(format, &plaintext, path)?;
    let merged = store.merge(pairs);

    tracing::debug!(
        path = %path.display(),
        %format,
        keys = merged,
        "Merged encrypted config file"
    );
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypted_format_by_suffix() {
        assert_eq!(
            encrypted_format(Path::new("config.json.enc")).unwrap(),
            Format::Json
        );
        assert_eq!(
            encrypted_format(Path::new("dir/config.yaml.enc")).unwrap(),
            Format::Yaml
        );
        assert_eq!(
            encrypted_format(Path::new("CONFIG.YML.ENC")).unwrap(),
            Format::Yaml
        );
    }

    #[test]
    fn test_unmatched_suffix_names_extension() {
        let err = encrypted_format(Path::new("config.toml.enc")).unwrap_err();
        let ConfigError::UnsupportedEncryptedFileType(ext) = &err else {
            panic!("expected unsupported encrypted file type, got {err}");
        };
        assert_eq!(ext, ".enc");

        let err = encrypted_format(Path::new("config.yaml")).unwrap_err();
        assert!(err.to_string().contains(".yaml"));
    }
}
