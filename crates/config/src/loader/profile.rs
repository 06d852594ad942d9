//! Profile overlay resolution.
//!
//! Responsibilities:
//! - Read the active profile name from an environment variable.
//! - Derive the overlay file path for a base file and profile.
//! - Load the base file and, when present on disk, the overlay.
//!
//! Does NOT handle:
//! - Decoding files (see `file.rs` and `dotenv.rs`).
//!
//! Invariants:
//! - `config.yaml` + `dev` -> `config-dev.yaml`; `.env` + `dev` -> `.env.dev`.
//! - A missing overlay is not an error; the base file alone is used.
//! - Unset, empty and whitespace-only profile variables all mean "no profile".

use std::path::{Path, PathBuf};

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use super::file::extension_of;

/// Which loader a profile-resolved file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Structured,
    Dotenv,
}

/// Terminal state of a profile load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileOutcome {
    /// Only the base file was loaded.
    BaseOnly,
    /// The base file and the overlay at this path were loaded.
    BaseWithProfile(PathBuf),
}

/// Inputs to a profile load, derived at call time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDescriptor {
    pub env_var: String,
    pub base_path: PathBuf,
    /// Lowercase extension of the base file, including the dot.
    pub extension: String,
    /// Active profile, if the variable is set.
    pub profile: Option<String>,
}

impl ProfileDescriptor {
    /// Reads the profile from `env_var` and classifies `base_path`.
    pub fn resolve(env_var: &str, base_path: &Path) -> Self {
        Self {
            env_var: env_var.to_string(),
            base_path: base_path.to_path_buf(),
            extension: extension_of(base_path),
            profile: env_var_or_none(env_var),
        }
    }

    pub fn source_kind(&self) -> SourceKind {
        if self.extension == ".env" {
            SourceKind::Dotenv
        } else {
            SourceKind::Structured
        }
    }

    /// Builds the overlay path for `profile`.
    pub fn overlay_path(&self, profile: &str) -> Result<PathBuf, ConfigError> {
        let base = self.base_path.to_string_lossy();
        match self.extension.as_str() {
            ".json" | ".yaml" | ".yml" => {
                let split = base.len() - self.extension.len();
                let (stem, ext) = base
                    .split_at_checked(split)
                    .ok_or_else(|| ConfigError::UnsupportedFileType(self.extension.clone()))?;
                Ok(PathBuf::from(format!("{stem}-{profile}{ext}")))
            }
            ".env" => Ok(PathBuf::from(format!("{base}.{profile}"))),
            other => Err(ConfigError::UnsupportedFileType(other.to_string())),
        }
    }
}

/// Loads `base_path` and its profile overlay into `loader`.
pub(crate) fn apply_profile(
    loader: &mut ConfigLoader,
    env_var: &str,
    base_path: &Path,
) -> Result<ProfileOutcome, ConfigError> {
    let descriptor = ProfileDescriptor::resolve(env_var, base_path);
    let kind = descriptor.source_kind();

    let Some(profile) = descriptor.profile.as_deref() else {
        load_source(loader, kind, base_path)?;
        return Ok(ProfileOutcome::BaseOnly);
    };

    let overlay = descriptor.overlay_path(profile)?;
    load_source(loader, kind, base_path)?;

    if !overlay.exists() {
        tracing::debug!(
            env_var,
            profile,
            overlay = %overlay.display(),
            "Profile overlay not found, using base file only"
        );
        return Ok(ProfileOutcome::BaseOnly);
    }

    load_source(loader, kind, &overlay)?;
    Ok(ProfileOutcome::BaseWithProfile(overlay))
}

fn load_source(
    loader: &mut ConfigLoader,
    kind: SourceKind,
    path: &Path,
) -> Result<(), ConfigError> {
    match kind {
        SourceKind::Dotenv => loader.load_dotenv(path),
        SourceKind::Structured => loader.load_file(path),
    }
}
