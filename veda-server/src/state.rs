//! Shared handler state.

use std::sync::Arc;
use veda_core::{InMemoryStore, QueryEngine};

/// State cloned into every request handler.
///
/// Holds a query engine over a shared store, so a loader holding the same
/// `Arc` can swap collections while the server runs.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: QueryEngine<Arc<InMemoryStore>>,
}

impl AppState {
    /// Serve queries from `store`.
    #[must_use]
    pub const fn new(store: Arc<InMemoryStore>) -> Self {
        Self {
            engine: QueryEngine::new(store),
        }
    }

    pub(crate) const fn engine(&self) -> &QueryEngine<Arc<InMemoryStore>> {
        &self.engine
    }
}
