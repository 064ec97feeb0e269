//! Check command implementation for the Data Veda CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;
use veda_core::InMemoryStore;
use veda_data::{CataloguePaths, CatalogueReport, load_catalogue};

use crate::{
    ARG_DATA_ELEMENTS, ARG_PURPOSES, CliError, process_env,
    sources::{resolve_paths, validate_sources},
};

/// CLI arguments for the `check` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load both catalogue files exactly as `serve` would and print \
                 how many rows were kept, skipped, or given default \
                 translations. Exits non-zero on fatal load errors.",
    about = "Validate the catalogue files without serving"
)]
#[ortho_config(prefix = "DATA_VEDA")]
pub(crate) struct CheckArgs {
    /// Path to the positional data-elements CSV.
    #[arg(long = ARG_DATA_ELEMENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) data_elements: Option<Utf8PathBuf>,
    /// Path to the header-driven purposes CSV.
    #[arg(long = ARG_PURPOSES, value_name = "path")]
    #[serde(default)]
    pub(crate) purposes: Option<Utf8PathBuf>,
}

impl CheckArgs {
    fn into_paths(self, env: &dyn Fn(&str) -> Option<String>) -> Result<CataloguePaths, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        Ok(resolve_paths(merged.data_elements, merged.purposes, env))
    }
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_check_with(args, &process_env, &mut stdout)
}

pub(crate) fn run_check_with(
    args: CheckArgs,
    env: &dyn Fn(&str) -> Option<String>,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let paths = args.into_paths(env)?;
    validate_sources(&paths)?;
    let report = load_catalogue(&InMemoryStore::new(), &paths)?;
    write_summary(writer, &paths, &report).map_err(CliError::WriteSummary)
}

fn write_summary(
    writer: &mut dyn Write,
    paths: &CataloguePaths,
    report: &CatalogueReport,
) -> std::io::Result<()> {
    let elements = report.data_elements;
    writeln!(
        writer,
        "data elements: {} loaded, {} skipped, {} with default translations ({})",
        elements.loaded, elements.skipped, elements.defaulted_translations, paths.data_elements
    )?;
    let purposes = report.purposes;
    writeln!(
        writer,
        "purposes: {} loaded, {} skipped ({})",
        purposes.loaded, purposes.skipped, paths.purposes
    )?;
    writer.flush()
}
