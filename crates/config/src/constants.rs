//! Centralized constants for the strata workspace.
//!
//! Default names and sizes used across the loader, the encryption layer and
//! the CLI, kept here to avoid duplicating literals.

// =============================================================================
// Profile & File Defaults
// =============================================================================

/// Environment variable naming the active profile (e.g. `dev`, `prod`).
pub const DEFAULT_PROFILE_ENV_VAR: &str = "APP_ENV";

/// Base configuration file used by the CLI when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Dotenv file loaded when an empty path is passed.
pub const DEFAULT_DOTENV_FILE: &str = ".env";

// =============================================================================
// Encryption
// =============================================================================

/// AES-256-GCM nonce length in bytes.
pub const NONCE_SIZE: usize = 12;

/// AES-256 key length in bytes (SHA-256 digest size).
pub const KEY_SIZE: usize = 32;

/// Compound suffixes accepted by the encrypted-file loader.
pub const ENCRYPTED_JSON_SUFFIX: &str = ".json.enc";
pub const ENCRYPTED_YAML_SUFFIX: &str = ".yaml.enc";
pub const ENCRYPTED_YML_SUFFIX: &str = ".yml.enc";
