//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use zion_core::store::StoreError;

/// An error returned by a dashboard handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The database cannot be reached (missing file, pool exhausted).
  #[error("database unavailable: {0}")]
  Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("failed to render page: {0}")]
  Render(#[from] std::io::Error),
}

impl ApiError {
  /// Classify a store error by whether the database was reachable.
  pub fn store<E: StoreError>(e: E) -> Self {
    if e.is_unavailable() {
      ApiError::Unavailable(Box::new(e))
    } else {
      ApiError::Store(Box::new(e))
    }
  }

  pub fn status(&self) -> StatusCode {
    match self {
      ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
      ApiError::Store(_) | ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    tracing::warn!(%status, "request failed: {self}");
    (status, Json(json!({ "error": self.to_string() }))).into_response()
  }
}
