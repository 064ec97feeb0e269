//! Serve command implementation for the Data Veda CLI.

use camino::Utf8PathBuf;
use clap::Parser;
use log::info;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};
use veda_core::InMemoryStore;
use veda_data::{CataloguePaths, load_catalogue};
use veda_server::{AppState, serve_blocking};

use crate::{
    ARG_DATA_ELEMENTS, ARG_HOST, ARG_PORT, ARG_PURPOSES, CliError, LEGACY_ENV_PORT, process_env,
    sources::{resolve_paths, validate_sources},
};

/// Listen address used when no host is configured.
pub(crate) const DEFAULT_HOST: &str = "0.0.0.0";
/// Listen port used when no port is configured.
pub(crate) const DEFAULT_PORT: u16 = 8005;

/// CLI arguments for the `serve` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Load the data-element and purpose CSV files into memory and \
                 serve them read-only over HTTP. Startup fails if either file \
                 cannot be opened or the purposes header lacks a required \
                 column.",
    about = "Serve the reference catalogue over HTTP"
)]
#[ortho_config(prefix = "DATA_VEDA")]
pub(crate) struct ServeArgs {
    /// Path to the positional data-elements CSV.
    #[arg(long = ARG_DATA_ELEMENTS, value_name = "path")]
    #[serde(default)]
    pub(crate) data_elements: Option<Utf8PathBuf>,
    /// Path to the header-driven purposes CSV.
    #[arg(long = ARG_PURPOSES, value_name = "path")]
    #[serde(default)]
    pub(crate) purposes: Option<Utf8PathBuf>,
    /// IP address to listen on (default 0.0.0.0).
    #[arg(long = ARG_HOST, value_name = "ip")]
    #[serde(default)]
    pub(crate) host: Option<String>,
    /// TCP port to listen on (default 8005).
    #[arg(long = ARG_PORT, value_name = "port")]
    #[serde(default)]
    pub(crate) port: Option<u16>,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServeConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        ServeConfig::resolve(merged, &process_env)
    }
}

/// Resolved `serve` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ServeConfig {
    pub(crate) paths: CataloguePaths,
    pub(crate) addr: SocketAddr,
}

impl ServeConfig {
    /// Apply legacy variables and defaults to whatever the layers left unset.
    pub(crate) fn resolve(
        args: ServeArgs,
        env: &dyn Fn(&str) -> Option<String>,
    ) -> Result<Self, CliError> {
        let paths = resolve_paths(args.data_elements, args.purposes, env);
        let port = match args.port {
            Some(port) => port,
            None => match env(LEGACY_ENV_PORT) {
                Some(value) => value.parse::<u16>().map_err(|source| CliError::InvalidPort {
                    env: LEGACY_ENV_PORT,
                    value,
                    source,
                })?,
                None => DEFAULT_PORT,
            },
        };
        let host = args.host.unwrap_or_else(|| DEFAULT_HOST.to_owned());
        let ip: IpAddr = host
            .parse()
            .map_err(|source| CliError::InvalidHost { host, source })?;
        Ok(Self {
            paths,
            addr: SocketAddr::new(ip, port),
        })
    }
}

pub(crate) fn run_serve(args: ServeArgs) -> Result<(), CliError> {
    let config = args.into_config()?;
    let state = prepare_state(&config)?;
    serve_blocking(state, config.addr)?;
    Ok(())
}

/// Validate and load the catalogue, yielding handler state.
pub(crate) fn prepare_state(config: &ServeConfig) -> Result<AppState, CliError> {
    validate_sources(&config.paths)?;
    let store = Arc::new(InMemoryStore::new());
    let report = load_catalogue(&store, &config.paths)?;
    info!(
        "catalogue ready: {} data elements, {} purposes",
        report.data_elements.loaded, report.purposes.loaded
    );
    Ok(AppState::new(store))
}
