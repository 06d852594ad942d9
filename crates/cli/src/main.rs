//! configctl - inspect layered application configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Initialize logging to stderr.
//! - Run the requested action and map failures to exit codes.
//!
//! Does NOT handle:
//! - Loading or merging sources (see `strata-config`).
//!
//! Invariants:
//! - Stdout carries only the exported configuration.

mod args;
mod dispatch;
mod error;

use std::io;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::ExitCode;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(io::stderr))
        .init();

    let exit_code = match run_command(&cli, &mut io::stdout().lock()) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            ExitCode::from(&e)
        }
    };

    std::process::exit(exit_code.as_i32());
}
