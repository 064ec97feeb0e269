//! Core domain types for the Data Veda reference-data service.
//!
//! The crate owns the record shapes served to callers, the in-memory store
//! that holds them, and the filter/paginate query engine. It performs no I/O:
//! loaders in `veda-data` populate an [`InMemoryStore`] and transports hand
//! [`QueryParams`] to a [`QueryEngine`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use veda_core::{
//!     DataElement, DataElementQuery, DataElementResult, InMemoryStore, QueryEngine,
//!     QueryParams, Translations,
//! };
//!
//! let store = Arc::new(InMemoryStore::new());
//! store.replace_data_elements(vec![DataElement::new(
//!     "DE-1".into(),
//!     "Passport Number".into(),
//!     String::new(),
//!     Vec::new(),
//!     "Identity".into(),
//!     Translations::default(),
//! )]);
//!
//! let engine = QueryEngine::new(Arc::clone(&store));
//! let params = QueryParams::from_pairs([("domain", "ident")]);
//! let DataElementResult::Page(page) = engine.data_elements(&DataElementQuery::from_params(&params))
//! else {
//!     panic!("expected a page");
//! };
//! assert_eq!(page.total, 1);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod data_element;
mod language;
mod purpose;
pub mod query;
pub mod store;
mod text;
mod translations;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use data_element::DataElement;
pub use language::LanguageCode;
pub use purpose::Purpose;
pub use query::{
    DataElementQuery, DataElementResult, LimitPolicy, Page, PageRequest, PurposeQuery,
    QueryEngine, QueryParams,
};
pub use store::{InMemoryStore, ReferenceStore};
pub use text::split_and_trim;
pub use translations::Translations;
