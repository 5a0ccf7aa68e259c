//! Integration tests for `SqliteStore` against an in-memory database.

use std::{collections::HashSet, time::Duration};

use seaworth_core::{inquiry::NewInquiry, store::InquiryStore};

use crate::SqliteStore;

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn submission(name: &str, email: &str) -> NewInquiry {
  NewInquiry {
    name:    name.into(),
    email:   email.into(),
    subject: "Pricing".into(),
    message: "Please send a quote.".into(),
  }
}

/// Creates are fast enough to share a timestamp; space them out so ordering
/// assertions are deterministic.
async fn spaced_create(s: &SqliteStore, name: &str, email: &str) {
  s.create(submission(name, email)).await.unwrap();
  tokio::time::sleep(Duration::from_millis(10)).await;
}

// ─── Create ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_returns_the_persisted_inquiry() {
  let s = store().await;

  let inquiry = s
    .create(submission("Jane Doe", "jane@example.com"))
    .await
    .unwrap();

  assert!(!inquiry.id.is_nil());
  assert_eq!(inquiry.name, "Jane Doe");
  assert_eq!(inquiry.email, "jane@example.com");
  assert_eq!(inquiry.subject, "Pricing");
  assert_eq!(inquiry.message, "Please send a quote.");
}

#[tokio::test]
async fn created_ids_are_unique() {
  let s = store().await;

  let mut seen = HashSet::new();
  for i in 0..20 {
    let inquiry = s
      .create(submission("Jane", &format!("jane{i}@example.com")))
      .await
      .unwrap();
    assert!(seen.insert(inquiry.id), "duplicate id {}", inquiry.id);
  }
}

// ─── List ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_roundtrips_all_fields() {
  let s = store().await;

  let created = s
    .create(submission("Jane Doe", "jane@example.com"))
    .await
    .unwrap();

  let listed = s.list(1000).await.unwrap();
  assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn list_returns_newest_first() {
  let s = store().await;

  spaced_create(&s, "First", "first@example.com").await;
  spaced_create(&s, "Second", "second@example.com").await;
  spaced_create(&s, "Third", "third@example.com").await;

  let names: Vec<_> = s
    .list(1000)
    .await
    .unwrap()
    .into_iter()
    .map(|i| i.name)
    .collect();
  assert_eq!(names, ["Third", "Second", "First"]);
}

#[tokio::test]
async fn list_caps_at_the_given_limit() {
  let s = store().await;

  for i in 0..5 {
    spaced_create(&s, &format!("Visitor {i}"), &format!("v{i}@example.com"))
      .await;
  }

  let listed = s.list(3).await.unwrap();
  assert_eq!(listed.len(), 3);
  // The cap keeps the newest entries, not the oldest.
  assert_eq!(listed[0].name, "Visitor 4");
  assert_eq!(listed[2].name, "Visitor 2");
}

#[tokio::test]
async fn repeated_lists_return_identical_records() {
  let s = store().await;
  s.create(submission("Jane", "jane@example.com")).await.unwrap();

  let first = s.list(1000).await.unwrap();
  let second = s.list(1000).await.unwrap();
  assert_eq!(first, second);
}

// ─── Count ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn count_tracks_successful_creates() {
  let s = store().await;
  assert_eq!(s.count().await.unwrap(), 0);

  for i in 0..4 {
    s.create(submission("Jane", &format!("jane{i}@example.com")))
      .await
      .unwrap();
  }
  assert_eq!(s.count().await.unwrap(), 4);
}

#[tokio::test]
async fn count_is_independent_of_the_list_limit() {
  let s = store().await;

  for i in 0..6 {
    s.create(submission("Jane", &format!("jane{i}@example.com")))
      .await
      .unwrap();
  }

  assert_eq!(s.list(2).await.unwrap().len(), 2);
  assert_eq!(s.count().await.unwrap(), 6);
}

// ─── Document fallback ───────────────────────────────────────────────────────

/// Insert a raw row directly, bypassing `create`.
async fn insert_raw(s: &SqliteStore, key: &str, doc: &str, at: &str) {
  let key = key.to_owned();
  let doc = doc.to_owned();
  let at = at.to_owned();
  s.conn
    .call(move |conn| {
      conn.execute(
        "INSERT INTO inquiries (inquiry_id, doc, submitted_at)
         VALUES (?1, ?2, ?3)",
        rusqlite::params![key, doc, at],
      )?;
      Ok(())
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn document_without_id_gets_a_synthesised_one() {
  let s = store().await;

  insert_raw(
    &s,
    "legacy-row",
    r#"{"name":"Old","email":"old@example.com","subject":"s","message":"m","timestamp":"2020-01-01T00:00:00Z"}"#,
    "2020-01-01T00:00:00+00:00",
  )
  .await;

  let listed = s.list(1000).await.unwrap();
  assert_eq!(listed.len(), 1);
  assert!(!listed[0].id.is_nil());
  assert_eq!(listed[0].name, "Old");
}

#[tokio::test]
async fn corrupt_document_fails_the_read() {
  let s = store().await;

  insert_raw(&s, "bad-row", "not json", "2020-01-01T00:00:00+00:00").await;

  let err = s.list(1000).await.unwrap_err();
  assert!(matches!(err, crate::Error::Json(_)));
}
