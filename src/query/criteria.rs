//! # Filter Criteria
//!
//! The typed, request-scoped filter value object. Multi-value fields
//! arrive comma-joined at the transport boundary; inward of the boundary
//! they are proper string sets. Every field is optional — absent means
//! unconstrained on that dimension.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::predicate::{Clause, Facet, Predicate};

/// Validated filter criteria for the listing endpoint
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Free-text search over customer name OR phone number
    pub search: Option<String>,

    pub regions: BTreeSet<String>,
    pub genders: BTreeSet<String>,
    pub categories: BTreeSet<String>,
    pub tags: BTreeSet<String>,
    pub payment_methods: BTreeSet<String>,

    /// Inclusive age bounds
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,

    /// Inclusive date bounds
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl FilterCriteria {
    /// Build the matching predicate: one clause per populated field,
    /// combined conjunctively.
    pub fn to_predicate(&self) -> Predicate {
        let mut predicate = Predicate::new();

        if let Some(search) = &self.search {
            predicate = predicate.and(Clause::Contains(search.to_lowercase()));
        }
        if !self.regions.is_empty() {
            predicate = predicate.and(Clause::InSet(Facet::Region, self.regions.clone()));
        }
        if !self.genders.is_empty() {
            predicate = predicate.and(Clause::InSet(Facet::Gender, self.genders.clone()));
        }
        if !self.categories.is_empty() {
            predicate =
                predicate.and(Clause::InSet(Facet::ProductCategory, self.categories.clone()));
        }
        if !self.tags.is_empty() {
            predicate = predicate.and(Clause::AnyTag(self.tags.clone()));
        }
        if !self.payment_methods.is_empty() {
            predicate =
                predicate.and(Clause::InSet(Facet::PaymentMethod, self.payment_methods.clone()));
        }
        if self.min_age.is_some() || self.max_age.is_some() {
            predicate = predicate.and(Clause::AgeBetween(self.min_age, self.max_age));
        }
        if self.start_date.is_some() || self.end_date.is_some() {
            predicate = predicate.and(Clause::DateBetween(self.start_date, self.end_date));
        }

        predicate
    }
}

/// Split a comma-joined multi-select value into a set
///
/// Entries are trimmed; empty entries are dropped. An entirely empty
/// input yields an empty set (unconstrained).
pub fn split_multi_value(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_multi_value() {
        let set = split_multi_value("North, South ,East");
        assert_eq!(set.len(), 3);
        assert!(set.contains("North"));
        assert!(set.contains("South"));
        assert!(set.contains("East"));
    }

    #[test]
    fn test_split_drops_empty_entries() {
        assert!(split_multi_value("").is_empty());
        assert!(split_multi_value(" , ,").is_empty());
        assert_eq!(split_multi_value("UPI,").len(), 1);
    }

    #[test]
    fn test_empty_criteria_is_unconstrained() {
        let predicate = FilterCriteria::default().to_predicate();
        assert!(predicate.is_unconstrained());
    }

    #[test]
    fn test_only_populated_fields_constrain() {
        let criteria = FilterCriteria {
            search: Some("mee".to_string()),
            min_age: Some(18),
            ..Default::default()
        };
        let predicate = criteria.to_predicate();
        assert!(!predicate.is_unconstrained());
    }
}
