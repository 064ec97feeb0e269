//! Read-mostly storage for loaded reference data.
//!
//! The [`ReferenceStore`] trait exposes immutable snapshots of both
//! collections. [`InMemoryStore`] is the process-wide implementation: loaders
//! replace a whole collection at once and readers never observe a partially
//! replaced sequence.

use std::sync::{Arc, PoisonError, RwLock};

use crate::{DataElement, Purpose};

/// Read-only access to loaded data elements and purposes.
///
/// Snapshots are cheap to take and stay valid after the store is reloaded;
/// a reader keeps working on the collection it started with.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use veda_core::{DataElement, Purpose, ReferenceStore};
///
/// struct FixedStore {
///     elements: Arc<[DataElement]>,
///     purposes: Arc<[Purpose]>,
/// }
///
/// impl ReferenceStore for FixedStore {
///     fn data_elements(&self) -> Arc<[DataElement]> {
///         Arc::clone(&self.elements)
///     }
///
///     fn purposes(&self) -> Arc<[Purpose]> {
///         Arc::clone(&self.purposes)
///     }
/// }
///
/// let store = FixedStore {
///     elements: Arc::from(Vec::new()),
///     purposes: Arc::from(Vec::new()),
/// };
/// assert!(store.data_elements().is_empty());
/// ```
pub trait ReferenceStore {
    /// Snapshot of every data element in load order.
    fn data_elements(&self) -> Arc<[DataElement]>;

    /// Snapshot of every purpose in load order.
    fn purposes(&self) -> Arc<[Purpose]>;
}

impl<S> ReferenceStore for Arc<S>
where
    S: ReferenceStore + ?Sized,
{
    fn data_elements(&self) -> Arc<[DataElement]> {
        (**self).data_elements()
    }

    fn purposes(&self) -> Arc<[Purpose]> {
        (**self).purposes()
    }
}

/// Process-wide store holding both collections behind swappable snapshots.
///
/// Replacement builds the new collection before taking the write lock, so the
/// lock is held only for a pointer swap. Readers clone an `Arc` and release
/// the lock immediately.
#[derive(Debug)]
pub struct InMemoryStore {
    data_elements: RwLock<Arc<[DataElement]>>,
    purposes: RwLock<Arc<[Purpose]>>,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new())
    }

    /// Create a store pre-populated with the supplied records.
    #[must_use]
    pub fn with_records(data_elements: Vec<DataElement>, purposes: Vec<Purpose>) -> Self {
        Self {
            data_elements: RwLock::new(Arc::from(data_elements)),
            purposes: RwLock::new(Arc::from(purposes)),
        }
    }

    /// Replace every data element with `records`.
    pub fn replace_data_elements(&self, records: Vec<DataElement>) {
        swap(&self.data_elements, records);
    }

    /// Replace every purpose with `records`.
    pub fn replace_purposes(&self, records: Vec<Purpose>) {
        swap(&self.purposes, records);
    }
}

impl ReferenceStore for InMemoryStore {
    fn data_elements(&self) -> Arc<[DataElement]> {
        snapshot(&self.data_elements)
    }

    fn purposes(&self) -> Arc<[Purpose]> {
        snapshot(&self.purposes)
    }
}

fn snapshot<T>(slot: &RwLock<Arc<[T]>>) -> Arc<[T]> {
    // A poisoned lock still guards a complete `Arc`; the swap cannot panic
    // half-way through.
    let guard = slot.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&guard)
}

fn swap<T>(slot: &RwLock<Arc<[T]>>, records: Vec<T>) {
    let fresh: Arc<[T]> = Arc::from(records);
    let previous = {
        let mut guard = slot.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, fresh)
    };
    drop(previous);
}
