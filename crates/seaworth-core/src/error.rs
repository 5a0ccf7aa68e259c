//! Error types for `seaworth-core`.

use serde::Serialize;
use thiserror::Error;

/// A single failed check on one field of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
  pub field:  &'static str,
  pub reason: String,
}

/// The outcome of rejecting a [`NewInquiry`](crate::inquiry::NewInquiry).
///
/// Carries every failed field so callers can report all problems at once
/// rather than one per round trip.
#[derive(Debug, Clone, Error)]
#[error("validation failed on {} field(s)", .errors.len())]
pub struct ValidationError {
  pub errors: Vec<FieldError>,
}
