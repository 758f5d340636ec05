//! CLI module for salesboard
//!
//! Provides the command-line interface:
//! - serve: load the dataset and serve the API
//! - validate: parse a dataset CSV and report on it
//! - token: mint an access token

mod args;
mod commands;

pub use args::{Cli, Command};
pub use commands::{run, CliError};
