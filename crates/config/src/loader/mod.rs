//! Source loaders for layered configuration.
//!
//! Responsibilities:
//! - Load configuration from JSON/YAML files, `.env` files, system environment
//!   variables and encrypted files into a single store.
//! - Resolve profile overlays (`config-dev.yaml`, `.env.dev`) from an environment variable.
//! - Provide the `ConfigLoader` session type tying the loaders together.
//!
//! Does NOT handle:
//! - Typed projection rules (see `projector`).
//! - Cipher internals (see `encryption.rs`).
//!
//! Invariants / Assumptions:
//! - Every loader merges with last-write-wins semantics.
//! - Dotenv loading exports pairs into the process environment unless disabled.

mod builder;
mod dotenv;
mod encrypted;
mod env;
mod error;
mod file;
mod profile;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use dotenv::export_to_process_env;
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use file::Format;
pub use profile::{ProfileDescriptor, ProfileOutcome, SourceKind};

pub(crate) use file::{decode_map, inline_path};
