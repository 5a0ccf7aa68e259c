//! SQL schema for the inquiry document table.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `doc` holds the complete inquiry as a JSON document; `submitted_at` is
/// duplicated out of the document so listings can be ordered by an indexed
/// column.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- Inquiries are strictly write-once.
-- No UPDATE or DELETE is ever issued against this table.
CREATE TABLE IF NOT EXISTS inquiries (
    inquiry_id   TEXT PRIMARY KEY,
    doc          TEXT NOT NULL,   -- full JSON document
    submitted_at TEXT NOT NULL    -- ISO 8601 UTC; server-assigned
);

CREATE INDEX IF NOT EXISTS inquiries_submitted_idx ON inquiries(submitted_at);

PRAGMA user_version = 1;
";
