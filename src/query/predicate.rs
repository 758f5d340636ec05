//! # Predicate Clauses
//!
//! Typed filter clauses over sale records. A predicate is an explicit
//! list of clauses combined with AND logic; within a set-membership
//! clause, candidate values combine with OR (membership test).
//!
//! Clauses are store-agnostic: they evaluate against a record directly,
//! so the same predicate works for any `SaleStore` implementation.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use crate::model::SaleRecord;

/// Categorical fields usable in set-membership clauses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facet {
    Region,
    Gender,
    ProductCategory,
    PaymentMethod,
}

impl Facet {
    /// The record's value for this facet
    pub fn value<'a>(&self, record: &'a SaleRecord) -> &'a str {
        match self {
            Facet::Region => &record.customer_region,
            Facet::Gender => record.gender.as_str(),
            Facet::ProductCategory => &record.product_category,
            Facet::PaymentMethod => &record.payment_method,
        }
    }
}

/// A single filter clause
#[derive(Debug, Clone)]
pub enum Clause {
    /// Case-insensitive substring match over customer name OR phone
    /// number. The needle is stored lowercased.
    Contains(String),

    /// Facet value must be a member of the set
    InSet(Facet, BTreeSet<String>),

    /// At least one of the record's tags is in the set ("any of")
    AnyTag(BTreeSet<String>),

    /// Inclusive age bounds; `None` = open end
    AgeBetween(Option<u32>, Option<u32>),

    /// Inclusive date bounds; `None` = open end
    DateBetween(Option<DateTime<Utc>>, Option<DateTime<Utc>>),
}

impl Clause {
    /// Check whether a record satisfies this clause
    pub fn matches(&self, record: &SaleRecord) -> bool {
        match self {
            Clause::Contains(needle) => {
                record.customer_name.to_lowercase().contains(needle)
                    || record.phone_number.to_lowercase().contains(needle)
            }
            Clause::InSet(facet, values) => values.contains(facet.value(record)),
            Clause::AnyTag(values) => record.tags.iter().any(|t| values.contains(t.as_str())),
            Clause::AgeBetween(min, max) => {
                min.map_or(true, |m| record.age >= m) && max.map_or(true, |m| record.age <= m)
            }
            Clause::DateBetween(from, to) => {
                from.map_or(true, |f| record.date >= f) && to.map_or(true, |t| record.date <= t)
            }
        }
    }
}

/// A conjunction of clauses
#[derive(Debug, Clone, Default)]
pub struct Predicate {
    clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clause; all clauses must hold for a record to match
    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// True when no clauses constrain the match set
    pub fn is_unconstrained(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check whether a record satisfies every clause
    pub fn matches(&self, record: &SaleRecord) -> bool {
        self.clauses.iter().all(|c| c.matches(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Gender;
    use chrono::TimeZone;

    fn record() -> SaleRecord {
        SaleRecord {
            transaction_id: 42,
            date: Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap(),
            customer_id: "C-9".to_string(),
            customer_name: "Meera Nair".to_string(),
            phone_number: "9812345678".to_string(),
            gender: Gender::Female,
            age: 30,
            customer_region: "South".to_string(),
            customer_type: "New".to_string(),
            product_id: "P-1".to_string(),
            product_name: "Kettle".to_string(),
            brand: "Hearth".to_string(),
            product_category: "Appliances".to_string(),
            tags: vec!["kitchen".to_string(), "electric".to_string()],
            quantity: 1,
            price_per_unit: 30.0,
            discount_percentage: 0.0,
            total_amount: 30.0,
            final_amount: 30.0,
            payment_method: "Card".to_string(),
            order_status: "Delivered".to_string(),
            delivery_type: "Home".to_string(),
            store_id: "S-2".to_string(),
            store_location: "Kochi".to_string(),
            salesperson_id: "E-1".to_string(),
            employee_name: "Dev Patel".to_string(),
        }
    }

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_contains_matches_name_or_phone() {
        assert!(Clause::Contains("meera".to_string()).matches(&record()));
        assert!(Clause::Contains("9812".to_string()).matches(&record()));
        assert!(!Clause::Contains("zzz".to_string()).matches(&record()));
    }

    #[test]
    fn test_in_set_membership() {
        assert!(Clause::InSet(Facet::Region, set(&["South", "North"])).matches(&record()));
        assert!(!Clause::InSet(Facet::Region, set(&["West"])).matches(&record()));
        assert!(Clause::InSet(Facet::Gender, set(&["Female"])).matches(&record()));
    }

    #[test]
    fn test_any_tag_is_disjunctive() {
        // tags {kitchen, electric} vs accepted {electric, garden} -> match
        assert!(Clause::AnyTag(set(&["electric", "garden"])).matches(&record()));
        // accepted {garden, patio} -> no overlap
        assert!(!Clause::AnyTag(set(&["garden", "patio"])).matches(&record()));
    }

    #[test]
    fn test_age_bounds_inclusive() {
        assert!(Clause::AgeBetween(Some(30), None).matches(&record()));
        assert!(Clause::AgeBetween(None, Some(30)).matches(&record()));
        assert!(!Clause::AgeBetween(Some(31), None).matches(&record()));
        assert!(!Clause::AgeBetween(None, Some(29)).matches(&record()));
    }

    #[test]
    fn test_date_bounds_inclusive() {
        let day = Utc.with_ymd_and_hms(2023, 6, 1, 0, 0, 0).unwrap();
        assert!(Clause::DateBetween(Some(day), Some(day)).matches(&record()));
        let later = Utc.with_ymd_and_hms(2023, 6, 2, 0, 0, 0).unwrap();
        assert!(!Clause::DateBetween(Some(later), None).matches(&record()));
    }

    #[test]
    fn test_predicate_conjunction() {
        let predicate = Predicate::new()
            .and(Clause::InSet(Facet::Region, set(&["South"])))
            .and(Clause::AgeBetween(Some(18), Some(40)));
        assert!(predicate.matches(&record()));

        let predicate = Predicate::new()
            .and(Clause::InSet(Facet::Region, set(&["South"])))
            .and(Clause::AgeBetween(Some(35), None));
        assert!(!predicate.matches(&record()));
    }

    #[test]
    fn test_empty_predicate_matches_everything() {
        let predicate = Predicate::new();
        assert!(predicate.is_unconstrained());
        assert!(predicate.matches(&record()));
    }
}
