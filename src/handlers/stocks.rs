//! Stock endpoints: full listing, query-string screener, body-driven screener.

use crate::error::AppError;
use crate::filter::ScreenerFilter;
use crate::service::ScreenerService;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// GET / — every row, no filtering.
pub async fn list_all(State(state): State<AppState>) -> Result<Json<Vec<Value>>, AppError> {
    let rows = ScreenerService::list_all(&state.pool).await?;
    Ok(Json(rows))
}

/// GET /screener — filter from the query string. Flags arrive as the
/// literal strings "true"/"false"; malformed values fail here with a client
/// error, before the store is touched.
pub async fn screen(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Value>>, AppError> {
    let filter = ScreenerFilter::from_query_params(&params)?;
    let rows = ScreenerService::screen(&state.pool, &filter).await?;
    Ok(Json(rows))
}

/// POST /ai-screener — same screening semantics, filter from the JSON body.
/// Rule-based today; an AI layer generating the filter is planned upstream.
pub async fn ai_screen(
    State(state): State<AppState>,
    Json(filter): Json<ScreenerFilter>,
) -> Result<Json<Vec<Value>>, AppError> {
    filter.validate()?;
    let rows = ScreenerService::screen(&state.pool, &filter).await?;
    Ok(Json(rows))
}
