//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Resolve the requested action name to an [`Action`].
//!
//! Non-responsibilities:
//! - Does not load configuration (see `dispatch` module).

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use strata_config::constants::{DEFAULT_CONFIG_FILE, DEFAULT_PROFILE_ENV_VAR};

#[derive(Parser, Debug)]
#[command(name = "configctl")]
#[command(about = "Inspect layered application configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  configctl --conf config.yaml\n  APP_ENV=dev configctl --conf config.yaml --format yaml\n  configctl --env DEPLOY_ENV --conf .env\n"
)]
pub struct Cli {
    /// Action to perform (show)
    #[arg(long, default_value = "show")]
    pub action: String,

    /// Environment variable holding the active profile name
    #[arg(long = "env", default_value = DEFAULT_PROFILE_ENV_VAR)]
    pub env_var: String,

    /// Base configuration file (.json, .yaml, .yml or .env)
    #[arg(long = "conf", default_value = DEFAULT_CONFIG_FILE)]
    pub config_path: PathBuf,

    /// Output format for `show`
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Yaml,
}

/// Actions `configctl` can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Load the configuration and print every entry.
    Show,
}

/// An action name that does not match any [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAction(pub String);

impl fmt::Display for UnknownAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown action: {}", self.0)
    }
}

impl std::error::Error for UnknownAction {}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(Action::Show),
            other => Err(UnknownAction(other.to_string())),
        }
    }
}
