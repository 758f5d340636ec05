//! # In-Memory Store
//!
//! Holds the bulk-loaded dataset behind an `RwLock`. Serves as both the
//! production store (the dataset is a few thousand rows) and the test
//! double for the query executor.

use std::collections::BTreeSet;
use std::sync::RwLock;

use super::{FilterOptions, SaleStore, StoreError, StoreResult};
use crate::model::SaleRecord;
use crate::query::predicate::Predicate;

/// In-memory sale store
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<SaleRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with records
    pub fn with_records(records: Vec<SaleRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    /// Number of records currently held
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, Vec<SaleRecord>>> {
        self.records
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }
}

impl SaleStore for MemoryStore {
    fn matching(&self, predicate: &Predicate) -> StoreResult<Vec<SaleRecord>> {
        let records = self.read()?;
        Ok(records
            .iter()
            .filter(|r| predicate.matches(r))
            .cloned()
            .collect())
    }

    fn find_by_id(&self, transaction_id: u64) -> StoreResult<Option<SaleRecord>> {
        let records = self.read()?;
        Ok(records
            .iter()
            .find(|r| r.transaction_id == transaction_id)
            .cloned())
    }

    fn filter_options(&self) -> StoreResult<FilterOptions> {
        let records = self.read()?;

        let mut regions = BTreeSet::new();
        let mut genders = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut payment_methods = BTreeSet::new();
        let mut tags = BTreeSet::new();

        for record in records.iter() {
            regions.insert(record.customer_region.clone());
            genders.insert(record.gender.as_str().to_string());
            categories.insert(record.product_category.clone());
            payment_methods.insert(record.payment_method.clone());
            tags.extend(record.tags.iter().cloned());
        }

        // BTreeSet iteration is already alphabetical
        Ok(FilterOptions {
            customer_regions: regions.into_iter().collect(),
            genders: genders.into_iter().collect(),
            product_categories: categories.into_iter().collect(),
            payment_methods: payment_methods.into_iter().collect(),
            tags: tags.into_iter().collect(),
        })
    }

    fn insert_batch(&self, mut batch: Vec<SaleRecord>) -> StoreResult<usize> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))?;
        let inserted = batch.len();
        records.append(&mut batch);
        Ok(inserted)
    }
}
