//! # HTTP Surface
//!
//! Axum server, route handlers and response envelopes for the
//! dashboard API.

pub mod config;
pub mod response;
pub mod sales_routes;
pub mod server;

pub use config::HttpConfig;
pub use sales_routes::SalesState;
pub use server::HttpServer;
