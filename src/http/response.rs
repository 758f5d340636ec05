//! # Response Envelopes
//!
//! Success envelopes for the API. Failures use `ErrorBody` from the
//! error module; both carry the `success` discriminator.

use serde::Serialize;

use crate::model::SaleRecord;
use crate::query::{Listing, Summary};
use crate::store::FilterOptions;

/// Listing endpoint envelope
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse {
    pub success: bool,

    /// Records in this page
    pub count: usize,

    /// Records matching the filter, across all pages
    pub total: usize,

    pub page: usize,
    pub pages: usize,
    pub summary: Summary,
    pub data: Vec<SaleRecord>,
}

impl From<Listing> for ListResponse {
    fn from(listing: Listing) -> Self {
        Self {
            success: true,
            count: listing.data.len(),
            total: listing.total,
            page: listing.page,
            pages: listing.pages,
            summary: listing.summary,
            data: listing.data,
        }
    }
}

/// Single-record envelope
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse {
    pub success: bool,
    pub data: SaleRecord,
}

impl SingleResponse {
    pub fn new(data: SaleRecord) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Filter-options envelope
#[derive(Debug, Clone, Serialize)]
pub struct FilterOptionsResponse {
    pub success: bool,
    pub filters: FilterOptions,
}

impl FilterOptionsResponse {
    pub fn new(filters: FilterOptions) -> Self {
        Self {
            success: true,
            filters,
        }
    }
}
