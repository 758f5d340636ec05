//! # Data Model
//!
//! The sale record and its enumerated attributes.

pub mod date;
pub mod sale;

pub use sale::{Gender, SaleRecord};
