//! Encryption utilities for configuration blobs at rest.
//!
//! Responsibilities:
//! - Provide AES-256-GCM sealing and opening of `nonce || ciphertext+tag` blobs.
//! - Derive the symmetric key from a secret string with a single SHA-256 round.
//! - Handle the base64 (standard alphabet) text envelope.
//!
//! Does NOT handle:
//! - Reading encrypted files or choosing a decoder (see `loader/encrypted.rs`).
//!
//! Invariants:
//! - Every failure maps to a distinct `EncryptionError` variant so callers can
//!   tell "not encrypted" from "corrupt" from "wrong secret".
//! - Short input is reported as an error, never a panic.

use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::constants::{KEY_SIZE, NONCE_SIZE};

/// Errors that can occur during encryption operations.
#[derive(Debug, Error)]
pub enum EncryptionError {
    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(String),

    #[error("ciphertext too short: {len} bytes, expected at least {nonce_size}")]
    CiphertextTooShort { len: usize, nonce_size: usize },

    #[error("decryption failed: authentication failed (wrong secret or corrupted data)")]
    DecryptionFailed,

    #[error("encryption failed")]
    EncryptionFailed,
}

pub type Result<T> = std::result::Result<T, EncryptionError>;

/// Derives the AES-256 key as the SHA-256 digest of the secret's UTF-8 bytes.
pub fn derive_key(secret: &SecretString) -> [u8; KEY_SIZE] {
    Sha256::digest(secret.expose_secret().as_bytes()).into()
}

/// Core cryptographic logic for AES-256-GCM.
pub struct Encryptor;

impl Encryptor {
    /// Encrypts `data` under a fresh random nonce.
    /// Returns `nonce || ciphertext+tag`.
    pub fn seal(data: &[u8], key: &[u8; KEY_SIZE]) -> Result<Vec<u8>> {
        let cipher = Aes256Gcm::new(key.into());
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(&nonce, data)
            .map_err(|_| EncryptionError::EncryptionFailed)?;

        let mut blob = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&ciphertext);
        Ok(blob)
    }

    /// Decrypts a `nonce || ciphertext+tag` blob.
    pub fn open(blob: &[u8], key: &[u8; KEY_SIZE]) -> Result<Vec<u8>> {
        if blob.len() < NONCE_SIZE {
            return Err(EncryptionError::CiphertextTooShort {
                len: blob.len(),
                nonce_size: NONCE_SIZE,
            });
        }

        let (nonce, ciphertext) = blob.split_at(NONCE_SIZE);
        let cipher = Aes256Gcm::new(key.into());

        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| EncryptionError::DecryptionFailed)
    }
}

/// Encrypts `plaintext` under `secret` and returns the base64 text envelope.
pub fn encrypt_blob(plaintext: &[u8], secret: &SecretString) -> Result<String> {
    let blob = Encryptor::seal(plaintext, &derive_key(secret))?;
    Ok(STANDARD.encode(blob))
}

/// Decodes a base64 envelope and decrypts it under `secret`.
///
/// Surrounding whitespace (such as a trailing newline) is ignored.
pub fn decrypt_blob(encoded: &[u8], secret: &SecretString) -> Result<Vec<u8>> {
    let blob = STANDARD
        .decode(encoded.trim_ascii())
        .map_err(|e| EncryptionError::InvalidBase64(e.to_string()))?;
    Encryptor::open(&blob, &derive_key(secret))
}
