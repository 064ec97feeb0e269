//! Facade crate for the Data Veda reference catalogue.
//!
//! This crate re-exports the core record and query types and exposes the CSV
//! loaders and HTTP server behind feature flags.

#![forbid(unsafe_code)]

pub use veda_core::{
    DataElement, DataElementQuery, DataElementResult, InMemoryStore, LanguageCode, LimitPolicy,
    Page, PageRequest, Purpose, PurposeQuery, QueryEngine, QueryParams, ReferenceStore,
    Translations, split_and_trim,
};

#[cfg(feature = "loader")]
pub use veda_data::{
    CataloguePaths, CatalogueReport, LoadError, LoadReport, load_catalogue, load_data_elements,
    load_purposes,
};

#[cfg(feature = "server")]
pub use veda_server::{AppState, ServeError, router, serve, serve_blocking};
