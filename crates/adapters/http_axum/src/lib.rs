//! # paybill-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** over bills, totals and payments
//!   (`/all-bills`, `/total-bills`, `/bills`, `/payments`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and error kinds into HTTP responses
//! - Allow cross-origin requests and trace every request
//!
//! ## Dependency rule
//! Depends on `paybill-app` (for the port trait and services) and
//! `paybill-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
