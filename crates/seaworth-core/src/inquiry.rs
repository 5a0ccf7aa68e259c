//! Inquiry types and submission validation.
//!
//! An inquiry is an immutable record of a single visitor-submitted contact
//! request. Once stored it is never updated or deleted; the read model is
//! exactly what was written.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{FieldError, ValidationError};

// ─── Inquiry ─────────────────────────────────────────────────────────────────

/// A persisted contact inquiry.
///
/// `id` and `timestamp` are assigned by the store at insertion and are
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inquiry {
  pub id:        Uuid,
  pub name:      String,
  pub email:     String,
  pub subject:   String,
  pub message:   String,
  pub timestamp: DateTime<Utc>,
}

// ─── NewInquiry ──────────────────────────────────────────────────────────────

/// A submission as received from a visitor, before identity and timestamp
/// are assigned.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInquiry {
  pub name:    String,
  pub email:   String,
  pub subject: String,
  pub message: String,
}

impl NewInquiry {
  /// Check the submission against the field rules: `name` must be
  /// non-blank and `email` must be syntactically valid.
  ///
  /// All failed fields are reported together.
  pub fn validate(&self) -> Result<(), ValidationError> {
    let mut errors = Vec::new();

    if self.name.trim().is_empty() {
      errors.push(FieldError {
        field:  "name",
        reason: "must not be empty".into(),
      });
    }

    if !email_is_valid(&self.email) {
      errors.push(FieldError {
        field:  "email",
        reason: "is not a valid email address".into(),
      });
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ValidationError { errors })
    }
  }
}

// ─── Email syntax ────────────────────────────────────────────────────────────

/// Syntactic email check: one `@`, non-empty local part, dotted domain with
/// non-empty labels, no whitespace. Deliverability is not our concern.
fn email_is_valid(address: &str) -> bool {
  if address.chars().any(char::is_whitespace) {
    return false;
  }
  let Some((local, domain)) = address.split_once('@') else {
    return false;
  };
  if local.is_empty() || domain.contains('@') {
    return false;
  }
  domain.contains('.') && !domain.split('.').any(str::is_empty)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  fn submission(name: &str, email: &str) -> NewInquiry {
    NewInquiry {
      name:    name.into(),
      email:   email.into(),
      subject: "Pricing".into(),
      message: "Please send a quote.".into(),
    }
  }

  #[test]
  fn accepts_well_formed_submission() {
    assert!(submission("Jane Doe", "jane@example.com").validate().is_ok());
  }

  #[test]
  fn accepts_subdomains_and_plus_addressing() {
    assert!(email_is_valid("jane.doe+tag@mail.example.co.uk"));
  }

  #[test]
  fn rejects_blank_name() {
    let err = submission("   ", "jane@example.com").validate().unwrap_err();
    assert_eq!(err.errors.len(), 1);
    assert_eq!(err.errors[0].field, "name");
  }

  #[test]
  fn rejects_malformed_emails() {
    for bad in [
      "invalid-email",
      "@example.com",
      "jane@",
      "jane@example",
      "jane@exa mple.com",
      "jane@@example.com",
      "jane@example..com",
      "jane@.example.com",
      "",
    ] {
      assert!(!email_is_valid(bad), "accepted {bad:?}");
    }
  }

  #[test]
  fn reports_all_failed_fields_together() {
    let err = submission("", "invalid-email").validate().unwrap_err();
    let fields: Vec<_> = err.errors.iter().map(|e| e.field).collect();
    assert_eq!(fields, ["name", "email"]);
  }

  #[test]
  fn subject_and_message_are_unconstrained() {
    let sub = NewInquiry {
      name:    "Jane".into(),
      email:   "jane@example.com".into(),
      subject: String::new(),
      message: String::new(),
    };
    assert!(sub.validate().is_ok());
  }
}
