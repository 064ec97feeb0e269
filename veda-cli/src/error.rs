//! Error types emitted by the Data Veda CLI.

use std::sync::Arc;

use camino::Utf8PathBuf;
use thiserror::Error;
use veda_data::LoadError;
use veda_server::ServeError;

/// Errors emitted by the Data Veda CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Provided arguments failed Clap validation.
    #[error(transparent)]
    ArgumentParsing(#[from] clap::Error),
    /// Configuration layering failed (files, env, CLI).
    #[error("failed to load configuration: {0}")]
    Configuration(#[from] Arc<ortho_config::OrthoError>),
    /// A referenced input path does not exist on disk.
    #[error("{field} path {path:?} does not exist")]
    MissingSourceFile {
        /// Flag naming the source.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A referenced input path exists but is not a file.
    #[error("{field} path {path:?} exists but is not a file")]
    SourcePathNotFile {
        /// Flag naming the source.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
    },
    /// A referenced input path could not be inspected due to an IO error.
    #[error("failed to inspect {field} path {path:?}: {source}")]
    InspectSourcePath {
        /// Flag naming the source.
        field: &'static str,
        /// Resolved path.
        path: Utf8PathBuf,
        /// Source error from the filesystem.
        #[source]
        source: std::io::Error,
    },
    /// A port taken from the environment is not a valid TCP port.
    #[error("{env}={value:?} is not a valid port: {source}")]
    InvalidPort {
        /// Variable the value came from.
        env: &'static str,
        /// Raw value.
        value: String,
        /// Parse failure.
        #[source]
        source: std::num::ParseIntError,
    },
    /// The listen host is not an IP address.
    #[error("host {host:?} is not an IP address: {source}")]
    InvalidHost {
        /// Configured host.
        host: String,
        /// Parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
    /// A catalogue file could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
    /// The HTTP server stopped with an error.
    #[error(transparent)]
    Serve(#[from] ServeError),
    /// Writing the check summary failed.
    #[error("failed to write summary: {0}")]
    WriteSummary(#[source] std::io::Error),
}
