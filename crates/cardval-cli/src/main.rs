//! # cardval CLI entry point
//!
//! Parses the `--file` argument, initializes tracing, and maps the
//! validation outcome to the process exit code.

use std::io::IsTerminal;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cardval_cli::validate::{run_validate, ValidateArgs, EXIT_OPERATIONAL_ERROR};

/// Check a JSON card document against the embedded title/image contract.
///
/// --file is required; running without it is a usage error (exit 2).
/// Prints one line describing the outcome. Exits 1 if the document does
/// not conform and 2 if it cannot be read or parsed. A missing file is
/// reported but exits 0.
#[derive(Parser, Debug)]
#[command(name = "cardval", version)]
struct Cli {
    #[command(flatten)]
    validate: ValidateArgs,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostics go to stderr so stdout carries only the outcome line.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .init();

    match run_validate(&cli.validate) {
        Ok(outcome) => ExitCode::from(outcome.exit_code()),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_OPERATIONAL_ERROR)
        }
    }
}
