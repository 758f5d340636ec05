//! # Sales Routes
//!
//! The three read endpoints of the dashboard API:
//!
//! - `GET /sales` — search/filter/sort/paginate listing
//! - `GET /sales/filters` — distinct filter option values
//! - `GET /sales/:id` — single record by transaction id
//!
//! All three require an authenticated caller (unless the guard is
//! disabled in config).

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::{Json, Router};

use super::response::{FilterOptionsResponse, ListResponse, SingleResponse};
use crate::auth::TokenManager;
use crate::error::ApiError;
use crate::query::{ListRequest, QueryExecutor};

/// Shared state for the sales routes
pub struct SalesState {
    pub executor: QueryExecutor,
    pub tokens: TokenManager,
}

impl SalesState {
    pub fn new(executor: QueryExecutor, tokens: TokenManager) -> Self {
        Self { executor, tokens }
    }
}

/// Build the sales router
pub fn sales_routes(state: Arc<SalesState>) -> Router {
    Router::new()
        .route("/sales", get(list_sales))
        .route("/sales/filters", get(filter_options))
        .route("/sales/:id", get(get_sale))
        .with_state(state)
}

/// Reject unauthenticated callers uniformly
fn authorize(state: &SalesState, headers: &HeaderMap) -> Result<(), ApiError> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok());
    state.tokens.authorize(authorization)?;
    Ok(())
}

async fn list_sales(
    State(state): State<Arc<SalesState>>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Result<Json<ListResponse>, ApiError> {
    authorize(&state, &headers)?;

    let request = ListRequest::parse(&params)?;
    let listing = state.executor.list(&request)?;
    Ok(Json(ListResponse::from(listing)))
}

async fn filter_options(
    State(state): State<Arc<SalesState>>,
    headers: HeaderMap,
) -> Result<Json<FilterOptionsResponse>, ApiError> {
    authorize(&state, &headers)?;

    let filters = state.executor.filter_options()?;
    Ok(Json(FilterOptionsResponse::new(filters)))
}

async fn get_sale(
    State(state): State<Arc<SalesState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<SingleResponse>, ApiError> {
    authorize(&state, &headers)?;

    let transaction_id: u64 = id
        .parse()
        .map_err(|_| ApiError::Validation(format!("id must be a transaction id: {}", id)))?;

    let record = state.executor.find(transaction_id)?;
    Ok(Json(SingleResponse::new(record)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthConfig;
    use crate::store::MemoryStore;

    fn state(auth_enabled: bool) -> SalesState {
        let executor = QueryExecutor::new(Arc::new(MemoryStore::new()));
        let tokens = TokenManager::new(AuthConfig {
            enabled: auth_enabled,
            ..AuthConfig::default()
        });
        SalesState::new(executor, tokens)
    }

    #[test]
    fn test_router_builds() {
        let _router = sales_routes(Arc::new(state(true)));
    }

    #[test]
    fn test_authorize_rejects_missing_token() {
        let state = state(true);
        let result = authorize(&state, &HeaderMap::new());
        assert!(matches!(result, Err(ApiError::Auth(_))));
    }

    #[test]
    fn test_authorize_accepts_issued_token() {
        let state = state(true);
        let token = state.tokens.issue("tester").unwrap();

        let mut headers = HeaderMap::new();
        headers.insert("authorization", format!("Bearer {token}").parse().unwrap());
        assert!(authorize(&state, &headers).is_ok());
    }

    #[test]
    fn test_authorize_skipped_when_disabled() {
        let state = state(false);
        assert!(authorize(&state, &HeaderMap::new()).is_ok());
    }
}
