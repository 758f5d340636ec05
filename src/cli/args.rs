//! CLI argument definitions using clap
//!
//! Commands:
//! - salesboard serve --config <path>
//! - salesboard validate --csv <path>
//! - salesboard token --config <path> --subject <name>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::import::DEFAULT_ROW_CAP;

/// salesboard - read-only REST backend for a sales dashboard
#[derive(Parser, Debug)]
#[command(name = "salesboard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the dataset and serve the API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./salesboard.json")]
        config: PathBuf,
    },

    /// Parse a dataset CSV and report its contents without serving
    Validate {
        /// Path to the dataset CSV
        #[arg(long)]
        csv: PathBuf,

        /// Maximum rows to read
        #[arg(long, default_value_t = DEFAULT_ROW_CAP)]
        cap: usize,
    },

    /// Mint an access token for an API caller
    Token {
        /// Path to configuration file
        #[arg(long, default_value = "./salesboard.json")]
        config: PathBuf,

        /// Token subject
        #[arg(long, default_value = "dashboard")]
        subject: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
