//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Two failure families reach the wire: validation failures (422, with
//! per-field detail) and store failures (500, generic body). Store detail is
//! logged server-side and never returned to the caller.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use seaworth_core::ValidationError;
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The request body was parseable but failed field validation.
  #[error("{0}")]
  Validation(#[from] ValidationError),

  /// The request body could not be parsed at all.
  #[error("malformed request body: {0}")]
  Malformed(String),

  /// The store failed. `operation` names the store call for the log line.
  #[error("store error during {operation}: {source}")]
  Store {
    operation: &'static str,
    source:    Box<dyn std::error::Error + Send + Sync>,
  },
}

impl ApiError {
  /// Wrap a store error, tagging it with the operation name.
  pub fn store<E>(operation: &'static str, source: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    ApiError::Store { operation, source: Box::new(source) }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::Validation(v) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
          "status": "error",
          "message": "Validation failed",
          "errors": v.errors,
        })),
      )
        .into_response(),

      ApiError::Malformed(detail) => (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
          "status": "error",
          "message": detail,
        })),
      )
        .into_response(),

      ApiError::Store { operation, source } => {
        tracing::error!(operation, error = %source, "store operation failed");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({
            "status": "error",
            "message": "Internal server error",
          })),
        )
          .into_response()
      }
    }
  }
}
