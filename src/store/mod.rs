//! # Client Store
//!
//! Keyed persistence contract backing client records, plus the in-process
//! implementation used by tests and single-node deployments.
//!
//! The trait is the boundary: a relational implementation slots in behind
//! the same contract without touching the service layer.

mod memory;

pub use memory::MemoryStore;

use thiserror::Error;

use crate::model::{Client, ClientFilter};

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Infrastructure faults raised by a store backend.
///
/// These are deliberately outside the domain error taxonomy: the service
/// layer passes them through untranslated and the HTTP layer's default
/// error path turns them into a 500.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A reader or writer panicked while holding the store lock
    #[error("store lock poisoned")]
    LockPoisoned,

    /// Backend-specific failure (connectivity, corrupt row, ...)
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Keyed persistence contract for client records.
///
/// Implementations enforce key uniqueness; the scan order ("store-defined
/// order") is theirs to choose and callers must not rely on it.
pub trait ClientStore: Send + Sync {
    /// Point lookup by primary key
    fn find_by_id(&self, id: &str) -> StoreResult<Option<Client>>;

    /// Existence check by primary key
    fn exists(&self, id: &str) -> StoreResult<bool>;

    /// Insert-or-replace by primary key; returns the stored value
    fn save(&self, client: Client) -> StoreResult<Client>;

    /// Full scan in store-defined order
    fn find_all(&self) -> StoreResult<Vec<Client>>;

    /// Paged scan: the 0-indexed page of `per_page` records over the
    /// store-defined order. Pages past the end are empty, not an error.
    fn find_page(&self, page_index: usize, per_page: usize) -> StoreResult<Vec<Client>>;

    /// Predicate-filtered scan: equality over the filter's populated fields
    fn find_by_filter(&self, filter: &ClientFilter) -> StoreResult<Vec<Client>>;

    /// Delete by primary key; returns whether a record was removed
    fn delete_by_id(&self, id: &str) -> StoreResult<bool>;

    /// Total number of records
    fn count(&self) -> StoreResult<u64>;
}
