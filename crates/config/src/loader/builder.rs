//! Configuration session: one store plus the loaders that feed it.
//!
//! Responsibilities:
//! - Own the `Store` and the injected `Logger` for one loading session.
//! - Expose every source loader, the profile resolver, the typed projector
//!   and the exporters as methods.
//! - Report each load to the logger on success and failure.
//!
//! Does NOT handle:
//! - Format-specific parsing (delegated to file.rs, dotenv.rs, encrypted.rs).
//! - Profile path rules (delegated to profile.rs).
//!
//! Invariants / Assumptions:
//! - Later loads override earlier keys regardless of source type.
//! - Loads are not transactional: a failure leaves earlier merges in place.
//! - The logger observes only; errors are always returned to the caller.

use secrecy::SecretString;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use super::dotenv::{export_to_process_env, read_dotenv};
use super::encrypted::apply_encrypted_file;
use super::env::apply_sys_env;
use super::error::ConfigError;
use super::file::apply_file;
use super::profile::{ProfileOutcome, apply_profile};
use crate::constants::DEFAULT_DOTENV_FILE;
use crate::logger::{Fields, Logger, NoopLogger};
use crate::projector::{self, Settings};
use crate::store::Store;
use crate::value::Value;

/// Layered configuration loader.
pub struct ConfigLoader {
    store: Store,
    logger: Arc<dyn Logger>,
    export_dotenv: bool,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigLoader")
            .field("keys", &self.store.len())
            .field("export_dotenv", &self.export_dotenv)
            .finish_non_exhaustive()
    }
}

impl ConfigLoader {
    /// Create an empty loader with a no-op logger.
    pub fn new() -> Self {
        Self {
            store: Store::new(),
            logger: Arc::new(NoopLogger),
            export_dotenv: true,
        }
    }

    /// Create a loader preloaded with `pairs`, each normalized through `set`.
    ///
    /// Useful for tests that need no files or environment variables.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut loader = Self::new();
        loader.store.merge(pairs);
        loader
    }

    /// Set the logger notified on every load.
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn set_logger(&mut self, logger: Arc<dyn Logger>) {
        self.logger = logger;
    }

    /// Control whether dotenv pairs are also exported to the process environment.
    ///
    /// Enabled by default.
    pub fn with_dotenv_export(mut self, enabled: bool) -> Self {
        self.export_dotenv = enabled;
        self
    }

    /// Load a JSON (`.json`) or YAML (`.yaml`, `.yml`) file.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let result = apply_file(&mut self.store, path);
        self.report("config file", path_fields(path), result)
    }

    /// Load several files in order; later files override earlier ones.
    ///
    /// Stops at the first failure. Files merged before it stay merged.
    pub fn load_files<I, P>(&mut self, paths: I) -> Result<(), ConfigError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        for path in paths {
            self.load_file(path)?;
        }
        Ok(())
    }

    /// Load a dotenv file (`.env` when `path` is empty).
    ///
    /// Pairs are merged into the store and then, unless disabled with
    /// [`ConfigLoader::with_dotenv_export`], exported to the process environment.
    pub fn load_dotenv(&mut self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = match path.as_ref() {
            p if p.as_os_str().is_empty() => Path::new(DEFAULT_DOTENV_FILE),
            p => p,
        };

        let result = read_dotenv(path).map(|pairs| {
            let merged = self
                .store
                .merge(pairs.iter().map(|(k, v)| (k, Value::from(v.as_str()))));
            if self.export_dotenv {
                export_to_process_env(&pairs);
            }
            tracing::debug!(path = %path.display(), keys = merged, "Merged dotenv file");
            merged
        });
        self.report("dotenv file", path_fields(path), result)
    }

    /// Load one process environment variable, if set.
    ///
    /// The stored value is the uppercased raw string; it is not type-coerced.
    /// Returns whether the variable was present.
    pub fn load_sys_env(&mut self, name: &str) -> bool {
        let found = apply_sys_env(&mut self.store, name);
        let mut fields = Fields::new();
        fields.insert("key", name.to_string());
        fields.insert("found", found.to_string());
        self.logger.info("system env loaded", &fields);
        found
    }

    /// Decrypt and load a `.json.enc`, `.yaml.enc` or `.yml.enc` file.
    pub fn load_encrypted_file(
        &mut self,
        path: impl AsRef<Path>,
        secret: &SecretString,
    ) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let result = apply_encrypted_file(&mut self.store, path, secret);
        self.report("encrypted file", path_fields(path), result)
    }

    /// Load `base_path` plus the overlay selected by the profile in `env_var`.
    ///
    /// `config.yaml` with `APP_ENV=dev` also loads `config-dev.yaml`;
    /// `.env` with `APP_ENV=dev` also loads `.env.dev`. A missing overlay is
    /// not an error.
    pub fn load_with_profile(
        &mut self,
        env_var: &str,
        base_path: impl AsRef<Path>,
    ) -> Result<ProfileOutcome, ConfigError> {
        apply_profile(self, env_var, base_path.as_ref())
    }

    /// Set a value; key and value are normalized.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) {
        self.store.set(key, value);
    }

    /// Get a value by case-insensitive key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn get_all(&self) -> &HashMap<String, Value> {
        self.store.get_all()
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    /// Populate `target`, apply declared defaults, then validate.
    ///
    /// On validation failure `target` keeps the populated values.
    pub fn unmarshal<T: Settings>(&self, target: &mut T) -> Result<(), ConfigError> {
        projector::unmarshal(&self.store, target)
    }

    /// Build a fresh `T` from the store with defaults and validation applied.
    pub fn project<T: Settings + Default>(&self) -> Result<T, ConfigError> {
        let mut target = T::default();
        self.unmarshal(&mut target)?;
        Ok(target)
    }

    /// Pretty-printed JSON of every entry.
    pub fn to_json(&self) -> Result<Vec<u8>, ConfigError> {
        self.store.to_json()
    }

    /// YAML of every entry.
    pub fn to_yaml(&self) -> Result<Vec<u8>, ConfigError> {
        self.store.to_yaml()
    }

    fn report(
        &self,
        source: &str,
        fields: Fields,
        result: Result<usize, ConfigError>,
    ) -> Result<(), ConfigError> {
        match result {
            Ok(merged) => {
                let mut fields = fields;
                fields.insert("keys", merged.to_string());
                self.logger.info(&format!("{source} loaded"), &fields);
                Ok(())
            }
            Err(e) => {
                self.logger
                    .error(&format!("failed to load {source}"), &e, &fields);
                Err(e)
            }
        }
    }
}

fn path_fields(path: &Path) -> Fields {
    let mut fields = Fields::new();
    fields.insert("path", path.display().to_string());
    fields
}
