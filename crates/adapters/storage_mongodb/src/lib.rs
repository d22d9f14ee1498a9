//! # paybill-adapter-storage-mongodb
//!
//! Document storage adapter over the official [mongodb](https://docs.rs/mongodb) driver.
//!
//! ## Responsibilities
//! - Implement the `DocumentStore` port defined in `paybill-app::ports::storage`
//! - Own the driver client: build it from configuration, ping on startup,
//!   shut it down on exit
//! - Map between domain documents (JSON) and BSON, rendering object ids as
//!   hex strings
//!
//! ## Dependency rule
//! Depends on `paybill-app` (for the port trait) and `paybill-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod client;
mod convert;
mod document_store;
mod error;

pub use client::{Config, Database};
pub use document_store::MongoDocumentStore;
pub use error::StorageError;
