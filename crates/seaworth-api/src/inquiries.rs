//! Handlers for the inquiry routes.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | Liveness banner |
//! | `POST` | `/inquiries` | Body: name, email, subject, message; 422 on validation failure |
//! | `GET`  | `/inquiries` | Newest first, capped at the configured limit |
//! | `GET`  | `/inquiries/count` | Total stored inquiries, independent of the cap |

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use seaworth_core::{
  inquiry::{Inquiry, NewInquiry},
  store::InquiryStore,
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::{ApiState, CONFIRMATION, SERVICE_NAME, error::ApiError};

// ─── Responses ───────────────────────────────────────────────────────────────

/// Body returned on a successful submission.
#[derive(Debug, Serialize)]
pub struct InquiryResponse {
  pub status:  String,
  pub message: String,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
  pub count: u64,
}

// ─── Root ────────────────────────────────────────────────────────────────────

/// `GET /`
pub async fn root() -> Json<Value> {
  Json(json!({ "message": SERVICE_NAME, "status": "running" }))
}

// ─── Create ──────────────────────────────────────────────────────────────────

/// `POST /inquiries`
///
/// Validation runs before the store is touched; a rejected submission never
/// reaches `create` and leaves the count unchanged.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  payload: Result<Json<NewInquiry>, JsonRejection>,
) -> Result<Json<InquiryResponse>, ApiError>
where
  S: InquiryStore,
{
  let Json(input) =
    payload.map_err(|rejection| ApiError::Malformed(rejection.body_text()))?;
  input.validate()?;

  state
    .store
    .create(input)
    .await
    .map_err(|e| ApiError::store("create inquiry", e))?;

  Ok(Json(InquiryResponse {
    status:  "success".into(),
    message: CONFIRMATION.into(),
  }))
}

// ─── List ────────────────────────────────────────────────────────────────────

/// `GET /inquiries`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Inquiry>>, ApiError>
where
  S: InquiryStore,
{
  let inquiries = state
    .store
    .list(state.list_limit)
    .await
    .map_err(|e| ApiError::store("list inquiries", e))?;
  Ok(Json(inquiries))
}

// ─── Count ───────────────────────────────────────────────────────────────────

/// `GET /inquiries/count`
pub async fn count<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<CountResponse>, ApiError>
where
  S: InquiryStore,
{
  let count = state
    .store
    .count()
    .await
    .map_err(|e| ApiError::store("count inquiries", e))?;
  Ok(Json(CountResponse { count }))
}
