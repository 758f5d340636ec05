//! CLI command implementations
//!
//! `serve` performs the full boot sequence: load config, bulk-load the
//! dataset into the memory store, then hand off to the HTTP server.
//! `validate` and `token` are one-shot utilities.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::auth::{AuthError, TokenManager};
use crate::config::{AppConfig, ConfigError};
use crate::http::{HttpServer, SalesState};
use crate::import::{self, ImportError};
use crate::query::QueryExecutor;
use crate::store::{MemoryStore, SaleStore, StoreError};

use super::args::{Cli, Command};

/// CLI failures; all are fatal and printed to stderr by main
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Import(#[from] ImportError),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// Parse arguments and dispatch to the selected command
pub fn run() -> Result<(), CliError> {
    init_tracing();

    let cli = Cli::parse_args();
    match cli.command {
        Command::Serve { config } => serve(&config),
        Command::Validate { csv, cap } => validate(&csv, cap),
        Command::Token { config, subject } => token(&config, &subject),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

fn serve(config_path: &Path) -> Result<(), CliError> {
    let config = AppConfig::load_or_default(config_path)?;

    let store = Arc::new(MemoryStore::new());
    match &config.dataset {
        Some(dataset) => {
            let records = import::load_csv_file(dataset, config.import_cap)?;
            let loaded = store.insert_batch(records)?;
            tracing::info!(records = loaded, dataset = %dataset.display(), "store loaded");
        }
        None => {
            tracing::warn!("no dataset configured; serving an empty store");
        }
    }

    let state = Arc::new(SalesState::new(
        QueryExecutor::new(store),
        TokenManager::new(config.auth.clone()),
    ));
    let server = HttpServer::new(config.http.clone(), state);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(server.serve())?;
    Ok(())
}

fn validate(csv: &Path, cap: usize) -> Result<(), CliError> {
    let records = import::load_csv_file(csv, cap)?;
    let store = MemoryStore::with_records(records);

    let count = store.len()?;
    let options = store.filter_options()?;
    println!("{count} records");
    println!("regions: {}", options.customer_regions.join(", "));
    println!("categories: {}", options.product_categories.join(", "));
    println!("payment methods: {}", options.payment_methods.join(", "));
    Ok(())
}

fn token(config_path: &Path, subject: &str) -> Result<(), CliError> {
    let config = AppConfig::load_or_default(config_path)?;
    let token = TokenManager::new(config.auth).issue(subject)?;
    println!("{token}");
    Ok(())
}
