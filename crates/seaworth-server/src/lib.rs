//! Process wiring for the Sea Worth inquiry server: configuration, CORS,
//! and router assembly. The binary in `main.rs` is a thin shell around this.

use std::{path::PathBuf, sync::Arc};

use axum::{Router, http::HeaderValue, http::Method};
use seaworth_core::store::InquiryStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowHeaders, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `SEAWORTH_`-prefixed environment variables. Loaded once at startup and
/// immutable for the process lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:            String,
  #[serde(default = "default_port")]
  pub port:            u16,
  #[serde(default = "default_db_path")]
  pub db_path:         PathBuf,
  /// Cap on a single inquiry listing. A pagination stand-in, not a
  /// considered page size.
  #[serde(default = "default_list_limit")]
  pub list_limit:      usize,
  #[serde(default = "default_op_timeout_secs")]
  pub op_timeout_secs: u64,
  /// Exact origins to allow, or `"*"` to mirror whatever origin asks.
  #[serde(default = "default_cors_origins")]
  pub cors_origins:    Vec<String>,
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 8000 }
fn default_db_path() -> PathBuf { "seaworth.db".into() }
fn default_list_limit() -> usize { 1000 }
fn default_op_timeout_secs() -> u64 { 10 }
fn default_cors_origins() -> Vec<String> { vec!["*".into()] }

// ─── CORS ────────────────────────────────────────────────────────────────────

/// Build the CORS layer from the configured origin allow-list.
///
/// Credentials are always allowed, which rules out wildcard header values;
/// a configured `"*"` therefore mirrors the request origin, and headers are
/// mirrored unconditionally.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
  let layer = CorsLayer::new()
    .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true);

  if origins.iter().any(|o| o == "*") {
    return layer.allow_origin(AllowOrigin::mirror_request());
  }

  let parsed: Vec<HeaderValue> = origins
    .iter()
    .filter_map(|origin| match origin.parse() {
      Ok(value) => Some(value),
      Err(_) => {
        tracing::warn!(%origin, "ignoring unparseable CORS origin");
        None
      }
    })
    .collect();

  layer.allow_origin(AllowOrigin::list(parsed))
}

// ─── Application ─────────────────────────────────────────────────────────────

/// Assemble the full application: API under `/api`, request tracing, CORS.
pub fn app<S>(store: Arc<S>, cfg: &ServerConfig) -> Router
where
  S: InquiryStore + 'static,
{
  Router::new()
    .nest("/api", seaworth_api::api_router(store, cfg.list_limit))
    .layer(TraceLayer::new_for_http())
    .layer(cors_layer(&cfg.cors_origins))
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn config_defaults_apply_to_an_empty_source() {
    let cfg: ServerConfig = config::Config::builder()
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap();

    assert_eq!(cfg.host, "0.0.0.0");
    assert_eq!(cfg.port, 8000);
    assert_eq!(cfg.list_limit, 1000);
    assert_eq!(cfg.op_timeout_secs, 10);
    assert_eq!(cfg.cors_origins, ["*"]);
  }
}
