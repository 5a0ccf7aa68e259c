//! Encoding and decoding between [`Inquiry`] values and the JSON documents
//! stored in the `doc` column.
//!
//! Timestamps are stored as RFC 3339 strings (both inside the document and
//! in the `submitted_at` ordering column). Row keys are hyphenated lowercase
//! UUID strings.

use chrono::{DateTime, Utc};
use seaworth_core::Inquiry;
use serde::Deserialize;
use uuid::Uuid;

use crate::Result;

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn encode_doc(inquiry: &Inquiry) -> Result<String> {
  Ok(serde_json::to_string(inquiry)?)
}

// ─── Stored document ─────────────────────────────────────────────────────────

/// A document as read back from the `doc` column.
///
/// `id` is optional: a document written by this service always carries one,
/// but the column is engine data and the read path must not fall over on a
/// row that lost it.
#[derive(Debug, Deserialize)]
pub struct StoredDoc {
  pub id:        Option<Uuid>,
  pub name:      String,
  pub email:     String,
  pub subject:   String,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
}

impl StoredDoc {
  pub fn decode(raw: &str) -> Result<Self> {
    Ok(serde_json::from_str(raw)?)
  }

  /// Convert into the public [`Inquiry`], translating the document id to
  /// the record id.
  ///
  /// A missing id is a data-integrity fault in the stored row. It is logged
  /// against `row_key` and a fresh id is synthesised so a single corrupt
  /// row cannot fail the whole listing.
  pub fn into_inquiry(self, row_key: &str) -> Inquiry {
    let id = self.id.unwrap_or_else(|| {
      tracing::warn!(
        row = row_key,
        "stored document is missing its id; synthesising a fresh one"
      );
      Uuid::new_v4()
    });

    Inquiry {
      id,
      name: self.name,
      email: self.email,
      subject: self.subject,
      message: self.message,
      timestamp: self.timestamp,
    }
  }
}
