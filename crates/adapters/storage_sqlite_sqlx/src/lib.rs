//! # paybill-adapter-storage-sqlite-sqlx
//!
//! `SQLite` document storage adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the `DocumentStore` port defined in `paybill-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain documents and JSON rows
//! - Load seed fixtures for the read-only collections
//!
//! Meant for local development and tests; production talks to the
//! document database through `paybill-adapter-storage-mongodb`.
//!
//! ## Dependency rule
//! Depends on `paybill-app` (for the port trait) and `paybill-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod document_store;
mod error;
mod pool;
pub mod seed;

pub use document_store::SqliteDocumentStore;
pub use error::StorageError;
pub use pool::{Config, Database};
