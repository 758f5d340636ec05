//! # Listing Request Parser
//!
//! Translates the flat query-string map of the listing endpoint into a
//! validated `ListRequest`. This is the only place the transport
//! encoding (comma-joined multi-selects, stringly numbers and dates)
//! is visible; everything inward works with typed values.
//!
//! Malformed numeric or date input is rejected with a validation error.
//! An unknown `sortBy` falls back to the default sort instead.

use std::collections::HashMap;

use super::criteria::{split_multi_value, FilterCriteria};
use super::page::Page;
use super::sort::SortKey;
use crate::error::ApiError;
use crate::model::date::parse_datetime;

/// A fully validated listing request
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub criteria: FilterCriteria,
    pub sort: SortKey,
    pub page: Page,
}

impl ListRequest {
    /// Parse query parameters. Unknown parameters are ignored.
    pub fn parse(params: &HashMap<String, String>) -> Result<Self, ApiError> {
        let mut criteria = FilterCriteria::default();

        if let Some(search) = non_empty(params, "search") {
            criteria.search = Some(search.to_string());
        }
        if let Some(value) = non_empty(params, "customerRegion") {
            criteria.regions = split_multi_value(value);
        }
        if let Some(value) = non_empty(params, "gender") {
            criteria.genders = split_multi_value(value);
        }
        if let Some(value) = non_empty(params, "productCategory") {
            criteria.categories = split_multi_value(value);
        }
        if let Some(value) = non_empty(params, "tags") {
            criteria.tags = split_multi_value(value);
        }
        if let Some(value) = non_empty(params, "paymentMethod") {
            criteria.payment_methods = split_multi_value(value);
        }

        if let Some(raw) = non_empty(params, "minAge") {
            criteria.min_age = Some(parse_age("minAge", raw)?);
        }
        if let Some(raw) = non_empty(params, "maxAge") {
            criteria.max_age = Some(parse_age("maxAge", raw)?);
        }

        if let Some(raw) = non_empty(params, "startDate") {
            criteria.start_date = Some(parse_date_bound("startDate", raw)?);
        }
        if let Some(raw) = non_empty(params, "endDate") {
            criteria.end_date = Some(parse_date_bound("endDate", raw)?);
        }

        let sort = SortKey::parse(params.get("sortBy").map(String::as_str));
        let page = Page::parse(
            params.get("page").map(String::as_str),
            params.get("limit").map(String::as_str),
        )?;

        Ok(Self {
            criteria,
            sort,
            page,
        })
    }
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|s| !s.trim().is_empty())
}

fn parse_age(name: &str, raw: &str) -> Result<u32, ApiError> {
    raw.trim()
        .parse()
        .map_err(|_| ApiError::Validation(format!("{} must be a non-negative integer: {}", name, raw)))
}

fn parse_date_bound(name: &str, raw: &str) -> Result<chrono::DateTime<chrono::Utc>, ApiError> {
    parse_datetime(raw)
        .ok_or_else(|| ApiError::Validation(format!("{} is not a valid date: {}", name, raw)))
}
