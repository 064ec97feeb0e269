//! Command-line interface for the Data Veda reference catalogue.
//!
//! `serve` loads both CSV files and exposes them over HTTP; `check` loads
//! them and reports what was kept and skipped without serving.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod check;
mod error;
mod serve;
mod sources;

pub use error::CliError;

use check::{CheckArgs, run_check};
use serve::{ServeArgs, run_serve};

pub(crate) const ARG_DATA_ELEMENTS: &str = "data-elements";
pub(crate) const ARG_PURPOSES: &str = "purposes";
pub(crate) const ARG_HOST: &str = "host";
pub(crate) const ARG_PORT: &str = "port";

/// Variables read when the layered configuration leaves a value unset.
pub(crate) const LEGACY_ENV_DATA_ELEMENTS: &str = "DATA_ELEMENTS_PATH";
pub(crate) const LEGACY_ENV_PURPOSES: &str = "PURPOSES_PATH";
pub(crate) const LEGACY_ENV_PORT: &str = "PORT";

/// Run the CLI with the current process arguments and environment.
///
/// # Errors
/// Returns [`CliError`] for argument, configuration, load and server
/// failures.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    match cli.command {
        Command::Serve(args) => run_serve(args),
        Command::Check(args) => run_check(args),
    }
}

/// Environment lookup used for the legacy fallbacks.
pub(crate) fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

#[derive(Debug, Parser)]
#[command(
    name = "data-veda",
    about = "Serve and validate the personal-data reference catalogue",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the catalogue and serve it over HTTP.
    Serve(ServeArgs),
    /// Load the catalogue and report row counts without serving.
    Check(CheckArgs),
}

#[cfg(test)]
mod tests;
