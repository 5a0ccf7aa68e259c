//! Black-box smoke test for a running inquiry server.
//!
//! A consumer of the API over the network, not part of it: point it at a
//! live instance and it walks the whole surface, checking status codes and
//! bodies against the wire contract.
//!
//! ```text
//! cargo run -p seaworth-server --bin smoke -- --base-url http://127.0.0.1:8000
//! ```
//!
//! Exits non-zero if any check fails.

use std::{process::ExitCode, time::Duration};

use anyhow::{Context as _, Result, ensure};
use chrono::Utc;
use clap::Parser;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

#[derive(Parser)]
#[command(about = "Exercise a running inquiry server over HTTP")]
struct Cli {
  /// Base URL of the server under test (without the /api prefix).
  #[arg(long, default_value = "http://127.0.0.1:8000")]
  base_url: String,
}

struct Harness {
  client:   Client,
  base_url: String,
}

impl Harness {
  fn new(base_url: String) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(10))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self { client, base_url })
  }

  fn url(&self, path: &str) -> String {
    format!("{}/api{}", self.base_url.trim_end_matches('/'), path)
  }

  async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .with_context(|| format!("GET {path} failed"))?;
    let status = resp.status();
    let body = resp.json().await.unwrap_or(Value::Null);
    Ok((status, body))
  }

  async fn post(&self, path: &str, body: &Value) -> Result<(StatusCode, Value)> {
    let resp = self
      .client
      .post(self.url(path))
      .json(body)
      .send()
      .await
      .with_context(|| format!("POST {path} failed"))?;
    let status = resp.status();
    let body = resp.json().await.unwrap_or(Value::Null);
    Ok((status, body))
  }

  async fn count(&self) -> Result<u64> {
    let (status, body) = self.get("/inquiries/count").await?;
    ensure!(status == StatusCode::OK, "count returned {status}");
    body["count"]
      .as_u64()
      .context("count response missing integer `count`")
  }
}

async fn run(h: &Harness) -> Result<()> {
  // Root banner.
  let (status, body) = h.get("/").await?;
  ensure!(status == StatusCode::OK, "root returned {status}");
  ensure!(body["status"] == "running", "root body: {body}");
  println!("ok - root endpoint running");

  let initial = h.count().await?;
  println!("ok - initial count is {initial}");

  // Valid submission; a timestamped email keeps reruns distinguishable.
  let stamp = Utc::now().format("%Y%m%d%H%M%S");
  let email = format!("smoke_{stamp}@example.com");
  let submission = json!({
    "name": format!("Smoke Tester {stamp}"),
    "email": email,
    "subject": "Smoke test inquiry",
    "message": "Automated check of the inquiry intake path.",
  });

  let (status, body) = h.post("/inquiries", &submission).await?;
  ensure!(status == StatusCode::OK, "create returned {status}: {body}");
  ensure!(body["status"] == "success", "create body: {body}");
  ensure!(
    body["message"]
      == "Your inquiry has been submitted successfully. We will contact you soon!",
    "unexpected confirmation: {body}"
  );
  println!("ok - valid inquiry accepted");

  // The new inquiry must be listed, with a server-assigned identity.
  let (status, body) = h.get("/inquiries").await?;
  ensure!(status == StatusCode::OK, "list returned {status}");
  let items = body.as_array().context("list body is not an array")?;
  let created = items
    .iter()
    .find(|i| i["email"] == email.as_str())
    .context("created inquiry not found in listing")?;
  ensure!(created["id"].is_string(), "listed inquiry has no id");
  ensure!(
    created["timestamp"].is_string(),
    "listed inquiry has no timestamp"
  );
  println!("ok - inquiry listed with id and timestamp");

  ensure!(
    h.count().await? == initial + 1,
    "count did not increase by one"
  );
  println!("ok - count incremented");

  // Invalid submission must be rejected without touching the store.
  let invalid = json!({
    "name": "",
    "email": "invalid-email",
    "subject": "",
    "message": "",
  });
  let (status, body) = h.post("/inquiries", &invalid).await?;
  ensure!(
    status == StatusCode::UNPROCESSABLE_ENTITY,
    "invalid submission returned {status}: {body}"
  );
  println!("ok - invalid inquiry rejected with 422");

  ensure!(
    h.count().await? == initial + 1,
    "rejected submission changed the count"
  );
  println!("ok - count unchanged after rejection");

  Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
  let cli = Cli::parse();

  let harness = match Harness::new(cli.base_url) {
    Ok(h) => h,
    Err(e) => {
      eprintln!("setup failed: {e:#}");
      return ExitCode::FAILURE;
    }
  };

  match run(&harness).await {
    Ok(()) => {
      println!("smoke test passed");
      ExitCode::SUCCESS
    }
    Err(e) => {
      eprintln!("smoke test failed: {e:#}");
      ExitCode::FAILURE
    }
  }
}
