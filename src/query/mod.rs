//! # Query Core
//!
//! Translates the listing endpoint's optional, multi-valued filter
//! criteria plus a sort selector and page descriptor into a matching
//! predicate, an ordered page slice, and aggregates over the full match
//! set.

pub mod criteria;
pub mod executor;
pub mod page;
pub mod predicate;
pub mod request;
pub mod sort;

pub use criteria::FilterCriteria;
pub use executor::{Listing, QueryExecutor, Summary};
pub use page::Page;
pub use predicate::Predicate;
pub use request::ListRequest;
pub use sort::SortKey;
