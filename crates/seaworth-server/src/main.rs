//! Sea Worth inquiry server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus
//! `SEAWORTH_`-prefixed environment variables, opens the SQLite-backed
//! inquiry store, and serves the JSON API under `/api`.

use std::{path::PathBuf, sync::Arc, time::Duration};

use anyhow::Context as _;
use clap::Parser;
use seaworth_server::ServerConfig;
use seaworth_store_sqlite::SqliteStore;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Sea Worth Traders inquiry API server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  // Load configuration. Environment variables override the file;
  // SEAWORTH_CORS_ORIGINS takes a comma-separated list.
  let settings = config::Config::builder()
    .add_source(config::File::from(cli.config).required(false))
    .add_source(
      config::Environment::with_prefix("SEAWORTH")
        .try_parsing(true)
        .list_separator(",")
        .with_list_parse_key("cors_origins"),
    )
    .build()
    .context("failed to read configuration")?;

  let cfg: ServerConfig = settings
    .try_deserialize()
    .context("failed to deserialise ServerConfig")?;

  // Open the inquiry store.
  let store = SqliteStore::open(&cfg.db_path)
    .await
    .with_context(|| format!("failed to open store at {:?}", cfg.db_path))?
    .with_op_timeout(Duration::from_secs(cfg.op_timeout_secs));

  let app = seaworth_server::app(Arc::new(store), &cfg);
  let address = format!("{}:{}", cfg.host, cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}
