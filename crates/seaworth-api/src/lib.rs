//! JSON REST API for the Sea Worth inquiry service.
//!
//! Exposes an axum [`Router`] backed by any
//! [`seaworth_core::store::InquiryStore`]. CORS, tracing, and transport
//! concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", seaworth_api::api_router(store.clone(), 1000))
//! ```

pub mod error;
pub mod inquiries;

use std::sync::Arc;

use axum::{Router, routing::get};
use seaworth_core::store::InquiryStore;

pub use error::ApiError;

/// Banner returned by the root route.
pub const SERVICE_NAME: &str = "SEA WORTH TRADERS API";

/// Confirmation text returned on a successful submission.
pub const CONFIRMATION: &str =
  "Your inquiry has been submitted successfully. We will contact you soon!";

// ─── State ───────────────────────────────────────────────────────────────────

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub store:      Arc<S>,
  /// Maximum number of inquiries a single list call may return.
  pub list_limit: usize,
}

// Manual impl so `S` itself need not be `Clone`.
impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:      Arc::clone(&self.store),
      list_limit: self.list_limit,
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, list_limit: usize) -> Router<()>
where
  S: InquiryStore + 'static,
{
  Router::new()
    .route("/", get(inquiries::root))
    .route(
      "/inquiries",
      get(inquiries::list::<S>).post(inquiries::create::<S>),
    )
    .route("/inquiries/count", get(inquiries::count::<S>))
    .with_state(ApiState { store, list_limit })
}
