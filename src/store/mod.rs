//! # Record Store
//!
//! The read-path abstraction the query executor runs against. The store
//! is bulk-loaded once at startup and read-only afterwards; the executor
//! takes a single snapshot per request, so a page, its total and its
//! summary are always computed from the same match set.

pub mod memory;

use serde::Serialize;
use thiserror::Error;

use crate::model::SaleRecord;
use crate::query::predicate::Predicate;

pub use memory::MemoryStore;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store access failures
///
/// Surfaced to the caller as a retrievable-error outcome; the store
/// never swallows a failure into an empty result.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The store cannot serve reads
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Distinct value sets for the filter UI's choice lists
///
/// Global distincts over the entire store, alphabetically sorted; never
/// scoped to a current filter selection.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub customer_regions: Vec<String>,
    pub genders: Vec<String>,
    pub product_categories: Vec<String>,
    pub payment_methods: Vec<String>,
    pub tags: Vec<String>,
}

/// Read access to the sale dataset
pub trait SaleStore: Send + Sync {
    /// Snapshot of all records satisfying the predicate
    fn matching(&self, predicate: &Predicate) -> StoreResult<Vec<SaleRecord>>;

    /// Fetch one record by its unique transaction id
    fn find_by_id(&self, transaction_id: u64) -> StoreResult<Option<SaleRecord>>;

    /// Distinct filter option values across the whole store
    fn filter_options(&self) -> StoreResult<FilterOptions>;

    /// Append a batch of records; used only by the bulk loader
    fn insert_batch(&self, records: Vec<SaleRecord>) -> StoreResult<usize>;
}
