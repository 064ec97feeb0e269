//! Loading both catalogue files into one store.

use camino::Utf8PathBuf;
use veda_core::InMemoryStore;

use crate::{LoadError, LoadReport, load_data_elements, load_purposes};

/// File read for data elements when no path is configured.
pub const DEFAULT_DATA_ELEMENTS_FILE: &str = "data_elements.csv";
/// File read for purposes when no path is configured.
pub const DEFAULT_PURPOSES_FILE: &str = "purposes.csv";

/// Locations of the two catalogue files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CataloguePaths {
    /// Positional data-element CSV.
    pub data_elements: Utf8PathBuf,
    /// Header-driven purposes CSV.
    pub purposes: Utf8PathBuf,
}

impl Default for CataloguePaths {
    fn default() -> Self {
        Self {
            data_elements: Utf8PathBuf::from(DEFAULT_DATA_ELEMENTS_FILE),
            purposes: Utf8PathBuf::from(DEFAULT_PURPOSES_FILE),
        }
    }
}

impl CataloguePaths {
    /// Pair two explicit paths.
    #[must_use]
    pub fn new(data_elements: impl Into<Utf8PathBuf>, purposes: impl Into<Utf8PathBuf>) -> Self {
        Self {
            data_elements: data_elements.into(),
            purposes: purposes.into(),
        }
    }
}

/// Per-file outcome of [`load_catalogue`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogueReport {
    /// Data-element file counts.
    pub data_elements: LoadReport,
    /// Purposes file counts.
    pub purposes: LoadReport,
}

/// Load data elements, then purposes, into `store`.
///
/// # Errors
/// Stops at the first fatal [`LoadError`]. If the purposes file fails, the
/// data elements already read remain in the store.
pub fn load_catalogue(
    store: &InMemoryStore,
    paths: &CataloguePaths,
) -> Result<CatalogueReport, LoadError> {
    let data_elements = load_data_elements(store, &paths.data_elements)?;
    let purposes = load_purposes(store, &paths.purposes)?;
    Ok(CatalogueReport {
        data_elements,
        purposes,
    })
}
