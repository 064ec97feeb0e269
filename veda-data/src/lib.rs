//! CSV loading for the Data Veda reference catalogue.
//!
//! Responsibilities:
//! - Parse the data-element and purpose CSV files into core records.
//! - Recover from bad rows: log, drop (or default translations), continue.
//!   Malformed quoting counts as a bad row.
//! - Replace store collections wholesale once a file has been read.
//!
//! Boundaries:
//! - Do not encode query rules (live in `veda-core`).
//! - Only the load path touches the filesystem.
//!
//! Invariants:
//! - A file that cannot be opened, or a purposes file missing a required
//!   header, leaves the corresponding store collection untouched.
//! - No global mutable state; the caller supplies the store.

#![forbid(unsafe_code)]

mod catalogue;
mod data_elements;
mod error;
mod purposes;
mod rows;

pub use catalogue::{
    CataloguePaths, CatalogueReport, DEFAULT_DATA_ELEMENTS_FILE, DEFAULT_PURPOSES_FILE,
    load_catalogue,
};
pub use data_elements::{DATA_ELEMENT_COLUMNS, load_data_elements, read_data_elements};
pub use error::LoadError;
pub use purposes::{REQUIRED_PURPOSE_HEADERS, load_purposes, read_purposes};
pub use rows::QuoteFault;

/// Counts gathered while reading one CSV file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Records kept, in file order.
    pub loaded: usize,
    /// Data rows dropped because they were short or could not be decoded.
    pub skipped: usize,
    /// Kept rows whose embedded translations were unreadable and defaulted.
    pub defaulted_translations: usize,
}

/// Records read from a CSV source together with their [`LoadReport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parsed<T> {
    /// Records in file order.
    pub records: Vec<T>,
    /// Row accounting for the read.
    pub report: LoadReport,
}

impl<T> Default for Parsed<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            report: LoadReport::default(),
        }
    }
}

impl<T> Parsed<T> {
    fn keep(&mut self, record: T) {
        self.records.push(record);
        self.report.loaded += 1;
    }

    const fn skip(&mut self) {
        self.report.skipped += 1;
    }
}
