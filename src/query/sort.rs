//! # Sort Keys
//!
//! The enumerated (field, direction) sort selectors for the listing
//! endpoint. Every key carries a deterministic secondary ordering by
//! transaction id so repeated identical queries paginate identically.

use std::cmp::Ordering;

use crate::model::SaleRecord;

/// Sort selector for the listing endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Newest first (default)
    #[default]
    DateDesc,
    DateAsc,
    QuantityDesc,
    QuantityAsc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Parse a `sortBy` value. Unknown or absent values fall back to
    /// the default rather than erroring.
    pub fn parse(value: Option<&str>) -> Self {
        match value {
            Some("date-desc") => SortKey::DateDesc,
            Some("date-asc") => SortKey::DateAsc,
            Some("quantity-desc") => SortKey::QuantityDesc,
            Some("quantity-asc") => SortKey::QuantityAsc,
            Some("name-asc") => SortKey::NameAsc,
            Some("name-desc") => SortKey::NameDesc,
            _ => SortKey::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::DateDesc => "date-desc",
            SortKey::DateAsc => "date-asc",
            SortKey::QuantityDesc => "quantity-desc",
            SortKey::QuantityAsc => "quantity-asc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Total order over records: the selected field first, then
    /// transaction id ascending as the tie-break.
    pub fn compare(&self, a: &SaleRecord, b: &SaleRecord) -> Ordering {
        let primary = match self {
            SortKey::DateDesc => b.date.cmp(&a.date),
            SortKey::DateAsc => a.date.cmp(&b.date),
            SortKey::QuantityDesc => b.quantity.cmp(&a.quantity),
            SortKey::QuantityAsc => a.quantity.cmp(&b.quantity),
            SortKey::NameAsc => a.customer_name.cmp(&b.customer_name),
            SortKey::NameDesc => b.customer_name.cmp(&a.customer_name),
        };
        primary.then_with(|| a.transaction_id.cmp(&b.transaction_id))
    }
}
