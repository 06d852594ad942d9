//! Command execution.
//!
//! Responsibilities:
//! - Resolve the action, load configuration and write the result.
//!
//! Invariants:
//! - The action name is checked before any file is read.
//! - Output goes to the given writer; diagnostics go through tracing (stderr).

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use strata_config::{ConfigLoader, ProfileOutcome, TracingLogger};

use crate::args::{Action, Cli, OutputFormat};

/// Runs the command described by `cli`, writing output to `out`.
pub fn run_command(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let action: Action = cli.action.parse()?;

    match action {
        Action::Show => show(cli, out),
    }
}

fn show(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let mut loader = ConfigLoader::new().with_logger(Arc::new(TracingLogger));

    let outcome = loader
        .load_with_profile(&cli.env_var, &cli.config_path)
        .with_context(|| format!("failed to load {}", cli.config_path.display()))?;
    if let ProfileOutcome::BaseWithProfile(overlay) = &outcome {
        tracing::info!(overlay = %overlay.display(), "Applied profile overlay");
    }

    let data = match cli.format {
        OutputFormat::Json => loader.to_json(),
        OutputFormat::Yaml => loader.to_yaml(),
    }
    .context("failed to export configuration")?;

    out.write_all(&data).context("failed to write output")?;
    if !data.ends_with(b"\n") {
        writeln!(out).context("failed to write output")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        let argv = std::iter::once("configctl").chain(args.iter().copied());
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_unknown_action_fails_before_loading() {
        let mut out = Vec::new();
        let args = cli(&["--action", "explode", "--conf", "/missing/config.yaml"]);
        let err = run_command(&args, &mut out).unwrap_err();
        assert_eq!(err.to_string(), "unknown action: explode");
        assert!(out.is_empty());
    }

    #[test]
    fn test_show_writes_sorted_json() {
        let temp_dir = TempDir::new().unwrap();
        let conf = temp_dir.path().join("config.json");
        fs::write(&conf, r#"{"b_key": 2, "a_key": "x"}"#).unwrap();

        let mut out = Vec::new();
        run_command(
            &cli(&[
                "--env",
                "_CONFIGCTL_UNIT_UNSET",
                "--conf",
                conf.to_str().unwrap(),
            ]),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "{\n  \"A_KEY\": \"x\",\n  \"B_KEY\": 2\n}\n");
    }

    #[test]
    fn test_load_error_has_context() {
        let mut out = Vec::new();
        let err = run_command(
            &cli(&[
                "--env",
                "_CONFIGCTL_UNIT_UNSET",
                "--conf",
                "/nonexistent/config.yaml",
            ]),
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "failed to load /nonexistent/config.yaml");
        assert!(format!("{err:#}").contains("Failed to read config file"));
    }
}
