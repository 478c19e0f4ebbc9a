//! Read-only access to the climate SQLite store.

mod query;
mod sqlite;

pub use sqlite::Store;
