//! [`SqliteStore`], the SQLite implementation of [`InquiryStore`].

use std::{path::Path, time::Duration};

use chrono::Utc;
use uuid::Uuid;

use seaworth_core::{
  inquiry::{Inquiry, NewInquiry},
  store::InquiryStore,
};

use crate::{
  Error, Result,
  doc::{StoredDoc, encode_doc, encode_dt, encode_uuid},
  schema::SCHEMA,
};

/// Upper bound on any single database operation. Overridable with
/// [`SqliteStore::with_op_timeout`].
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);

// ─── Store ───────────────────────────────────────────────────────────────────

/// An inquiry store backed by a single SQLite file.
///
/// Cloning is cheap. The inner connection is reference-counted and
/// serialises all access on its own thread.
#[derive(Clone)]
pub struct SqliteStore {
  pub(crate) conn: tokio_rusqlite::Connection,
  op_timeout:      Duration,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn, op_timeout: DEFAULT_OP_TIMEOUT };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store, useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn, op_timeout: DEFAULT_OP_TIMEOUT };
    store.init_schema().await?;
    Ok(store)
  }

  /// Replace the per-operation timeout. Operations that exceed it fail with
  /// [`Error::Timeout`]; they are never retried.
  #[must_use]
  pub fn with_op_timeout(mut self, timeout: Duration) -> Self {
    self.op_timeout = timeout;
    self
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run `f` on the connection thread under the per-operation timeout.
  async fn call_bounded<T, F>(&self, f: F) -> Result<T>
  where
    F: FnOnce(&mut rusqlite::Connection) -> tokio_rusqlite::Result<T>
      + Send
      + 'static,
    T: Send + 'static,
  {
    match tokio::time::timeout(self.op_timeout, self.conn.call(f)).await {
      Ok(result) => Ok(result?),
      Err(_) => Err(Error::Timeout(self.op_timeout)),
    }
  }
}

// ─── InquiryStore impl ───────────────────────────────────────────────────────

impl InquiryStore for SqliteStore {
  type Error = Error;

  async fn create(&self, input: NewInquiry) -> Result<Inquiry> {
    let inquiry = Inquiry {
      id:        Uuid::new_v4(),
      name:      input.name,
      email:     input.email,
      subject:   input.subject,
      message:   input.message,
      timestamp: Utc::now(),
    };

    let id_str  = encode_uuid(inquiry.id);
    let doc_str = encode_doc(&inquiry)?;
    let at_str  = encode_dt(inquiry.timestamp);

    let changed = self
      .call_bounded(move |conn| {
        let changed = conn.execute(
          "INSERT INTO inquiries (inquiry_id, doc, submitted_at)
           VALUES (?1, ?2, ?3)",
          rusqlite::params![id_str, doc_str, at_str],
        )?;
        Ok(changed)
      })
      .await?;

    if changed != 1 {
      return Err(Error::InsertNotAcknowledged);
    }

    Ok(inquiry)
  }

  async fn list(&self, limit: usize) -> Result<Vec<Inquiry>> {
    let limit_val = limit as i64;

    let rows: Vec<(String, String)> = self
      .call_bounded(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT inquiry_id, doc FROM inquiries
           ORDER BY submitted_at DESC
           LIMIT ?1",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![limit_val], |row| {
            Ok((row.get(0)?, row.get(1)?))
          })?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    rows
      .into_iter()
      .map(|(key, raw)| Ok(StoredDoc::decode(&raw)?.into_inquiry(&key)))
      .collect()
  }

  async fn count(&self) -> Result<u64> {
    let n: i64 = self
      .call_bounded(|conn| {
        Ok(conn.query_row("SELECT COUNT(*) FROM inquiries", [], |row| {
          row.get(0)
        })?)
      })
      .await?;
    Ok(n as u64)
  }
}
