//! The `InquiryStore` trait.
//!
//! The trait is implemented by storage backends (e.g.
//! `seaworth-store-sqlite`). The HTTP surface (`seaworth-api`) depends on
//! this abstraction, not on any concrete backend, so tests can substitute a
//! fake store.

use std::future::Future;

use crate::inquiry::{Inquiry, NewInquiry};

/// Abstraction over an inquiry store backend.
///
/// Inquiries are write-once. There is no update or delete operation, and
/// none will be added; `create`, `list` and `count` are the whole surface.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait InquiryStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Assign a fresh id and a current UTC timestamp to `input`, persist the
  /// resulting [`Inquiry`] as a single document, and return it.
  ///
  /// The write must be acknowledged by the backend; an unacknowledged
  /// insert is an error and the inquiry must be treated as not persisted.
  fn create(
    &self,
    input: NewInquiry,
  ) -> impl Future<Output = Result<Inquiry, Self::Error>> + Send + '_;

  /// Return at most `limit` inquiries, newest first (timestamp
  /// descending). The result is a finite snapshot, not a live feed.
  fn list(
    &self,
    limit: usize,
  ) -> impl Future<Output = Result<Vec<Inquiry>, Self::Error>> + Send + '_;

  /// Total number of stored inquiries, independent of any list limit.
  fn count(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;
}
