//! Query entry point bound to a store.

use super::{DataElementQuery, DataElementResult, Page, PurposeQuery};
use crate::{Purpose, ReferenceStore};

/// Runs queries against the snapshot current at call time.
///
/// The engine owns its store handle; pass an `Arc` to share a store with the
/// loader that refreshes it.
#[derive(Debug, Clone)]
pub struct QueryEngine<S> {
    store: S,
}

impl<S: ReferenceStore> QueryEngine<S> {
    /// Bind an engine to `store`.
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Filter and paginate data elements, or look one up by exact title.
    pub fn data_elements(&self, query: &DataElementQuery) -> DataElementResult {
        query.run(&self.store.data_elements())
    }

    /// Filter and paginate purposes.
    pub fn purposes(&self, query: &PurposeQuery) -> Page<Purpose> {
        query.run(&self.store.purposes())
    }
}
