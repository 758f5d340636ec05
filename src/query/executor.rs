//! # Query Executor
//!
//! Runs a validated listing request against the store: one snapshot of
//! the match set, then sort, slice and aggregate. The summary and the
//! total are computed over the full match set, never the page slice, so
//! they are invariant under pagination.

use std::sync::Arc;

use serde::Serialize;

use super::request::ListRequest;
use crate::error::ApiError;
use crate::model::SaleRecord;
use crate::store::{FilterOptions, SaleStore};

/// Aggregates over the full predicate-matched set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_units_sold: u64,
    pub total_amount: f64,
    pub total_discount: f64,
}

impl Summary {
    /// Aggregate a match set. An empty set yields all zeroes.
    pub fn aggregate(records: &[SaleRecord]) -> Self {
        let mut summary = Summary::default();
        for record in records {
            summary.total_units_sold += u64::from(record.quantity);
            summary.total_amount += record.total_amount;
            summary.total_discount += record.discount();
        }
        summary
    }
}

/// Result of a listing query: the page slice plus match-set metadata
#[derive(Debug, Clone)]
pub struct Listing {
    /// Records on the requested page, in sorted order
    pub data: Vec<SaleRecord>,

    /// Count of all records satisfying the predicate
    pub total: usize,

    /// One-based page number served
    pub page: usize,

    /// Total page count (`ceil(total / limit)`; 0 when nothing matched)
    pub pages: usize,

    /// Aggregates over the full match set
    pub summary: Summary,
}

/// Stateless per-request query execution over a shared store
#[derive(Clone)]
pub struct QueryExecutor {
    store: Arc<dyn SaleStore>,
}

impl QueryExecutor {
    pub fn new(store: Arc<dyn SaleStore>) -> Self {
        Self { store }
    }

    /// Execute a listing request
    ///
    /// The match set is read from the store exactly once; total, summary
    /// and the page slice all derive from that one snapshot.
    pub fn list(&self, request: &ListRequest) -> Result<Listing, ApiError> {
        let predicate = request.criteria.to_predicate();
        let mut matched = self.store.matching(&predicate)?;

        let total = matched.len();
        let summary = Summary::aggregate(&matched);

        matched.sort_by(|a, b| request.sort.compare(a, b));

        let data: Vec<SaleRecord> = matched
            .into_iter()
            .skip(request.page.offset())
            .take(request.page.size)
            .collect();

        Ok(Listing {
            data,
            total,
            page: request.page.number,
            pages: request.page.count_pages(total),
            summary,
        })
    }

    /// Fetch a single record by transaction id
    pub fn find(&self, transaction_id: u64) -> Result<SaleRecord, ApiError> {
        self.store
            .find_by_id(transaction_id)?
            .ok_or(ApiError::NotFound)
    }

    /// Distinct filter option values for the filter UI
    pub fn filter_options(&self) -> Result<FilterOptions, ApiError> {
        Ok(self.store.filter_options()?)
    }
}
