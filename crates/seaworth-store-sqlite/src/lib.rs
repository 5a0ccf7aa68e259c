//! SQLite backend for the Sea Worth inquiry store.
//!
//! Inquiries are kept as schemaless JSON documents in a single table, one
//! document per row. Wraps [`tokio_rusqlite`] so all database access runs on
//! a dedicated thread without blocking the async runtime.

mod doc;
mod schema;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::SqliteStore;

#[cfg(test)]
mod tests;
