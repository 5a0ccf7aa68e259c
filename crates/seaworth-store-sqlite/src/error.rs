//! Error type for `seaworth-store-sqlite`.

use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  #[error("json error: {0}")]
  Json(#[from] serde_json::Error),

  /// The insert ran without error but did not report exactly one written
  /// row. The inquiry must be treated as not persisted.
  #[error("insert was not acknowledged by the database")]
  InsertNotAcknowledged,

  #[error("operation timed out after {0:?}")]
  Timeout(Duration),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
