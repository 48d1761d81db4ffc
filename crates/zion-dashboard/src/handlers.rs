//! Route handlers.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/health` | 503 until the database answers `SELECT 1` |
//! | `GET`  | `/stats` | Row count per table plus `total_rows` |
//! | `GET`  | `/insights` | Every insight, keyed by name, in menu order |
//! | `GET`  | `/` | The same data as an HTML page |

use axum::{
  Json,
  extract::State,
  response::Html,
};
use serde_json::{Value, json};
use zion_core::{
  insights::{Insights, RowCounts},
  store::InsightsStore,
};

use crate::{AppState, error::ApiError, page};

/// `GET /health`
pub async fn health<S: InsightsStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Value>, ApiError> {
  state
    .store
    .ping()
    .await
    .map_err(|e| ApiError::Unavailable(Box::new(e)))?;
  Ok(Json(json!({ "status": "ok" })))
}

/// `GET /stats`
pub async fn stats<S: InsightsStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<RowCounts>, ApiError> {
  let counts = state.store.row_counts().await.map_err(ApiError::store)?;
  Ok(Json(counts))
}

/// `GET /insights`
pub async fn insights<S: InsightsStore>(
  State(state): State<AppState<S>>,
) -> Result<Json<Insights>, ApiError> {
  let insights = state.store.insights().await.map_err(ApiError::store)?;
  Ok(Json(insights))
}

/// `GET /`
pub async fn index<S: InsightsStore>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, ApiError> {
  let counts = state.store.row_counts().await.map_err(ApiError::store)?;
  let insights = state.store.insights().await.map_err(ApiError::store)?;
  Ok(Html(page::render(&counts, &insights)?))
}
