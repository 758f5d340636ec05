//! salesboard - read-only REST backend over a flat sales dataset
//!
//! The dataset is bulk-loaded from CSV at startup; the API serves
//! search, filter, sort and pagination over it, with aggregate summary
//! cards computed over the filtered set.

pub mod auth;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod import;
pub mod model;
pub mod query;
pub mod store;
