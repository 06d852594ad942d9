//! Layered configuration loading for strata.
//!
//! This crate merges JSON/YAML files, `.env` files, system environment
//! variables and encrypted files into one normalized key-value store, then
//! projects that store onto typed structures with defaults and validation.
//!
//! ```no_run
//! use strata_config::ConfigLoader;
//!
//! let mut loader = ConfigLoader::new();
//! loader.load_with_profile("APP_ENV", "config.yaml")?;
//! println!("{:?}", loader.get("APP_PORT"));
//! # Ok::<(), strata_config::ConfigError>(())
//! ```

pub mod constants;
pub mod encryption;
mod export;
mod loader;
pub mod logger;
pub mod projector;
mod store;
pub mod value;

pub use encryption::{EncryptionError, decrypt_blob, encrypt_blob};
pub use loader::{
    ConfigError, ConfigLoader, Format, ProfileDescriptor, ProfileOutcome, SourceKind,
    env_var_or_none, export_to_process_env,
};
pub use logger::{Fields, Logger, NoopLogger, TracingLogger};
pub use projector::{FieldKind, FieldSpec, Rule, Settings};
pub use store::Store;
pub use value::{Value, normalize_key, normalize_value};
