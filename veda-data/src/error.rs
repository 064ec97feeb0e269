//! Errors that abort a load.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::QuoteFault;

/// Fatal failures while loading a CSV source.
///
/// Row-level problems are never reported here; they are logged and counted
/// in [`LoadReport`](crate::LoadReport) instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened.
    #[error("cannot open {path}: {source}")]
    Open {
        /// Requested file path.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The source could not be read after opening.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File being read.
        path: Utf8PathBuf,
        /// Source error from std I/O.
        #[source]
        source: std::io::Error,
    },
    /// The header line was present but could not be decoded.
    #[error("error reading header from {path}: {source}")]
    ReadHeader {
        /// File being read.
        path: Utf8PathBuf,
        /// Source error from the CSV decoder.
        #[source]
        source: csv::Error,
    },
    /// The header line misuses double quotes.
    #[error("error reading header from {path}: {fault}")]
    MalformedHeader {
        /// File being read.
        path: Utf8PathBuf,
        /// The quoting problem found.
        fault: QuoteFault,
    },
    /// The purposes header lacks a required column.
    #[error("missing required header in {path}: {header}")]
    MissingHeader {
        /// File being read.
        path: Utf8PathBuf,
        /// Name of the first required column not found.
        header: &'static str,
    },
}
