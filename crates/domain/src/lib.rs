//! # paybill-domain
//!
//! Pure domain model for the utility bill management API.
//!
//! ## Responsibilities
//! - Foundational types: opaque document identifiers, error conventions
//! - Define **Collections** (the named document groups the API exposes)
//! - Define **Documents** (schema-less JSON records) and the top-level merge
//!   used by partial updates
//! - Define **Queries** (equality filter, sort key, limit) handed to storage
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod collection;
pub mod document;
pub mod query;
