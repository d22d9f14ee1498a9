//! # paybill-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement
//!   (driven/outbound port): `DocumentStore` — find, get, insert, merge-update
//!   and delete over named collections
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BillService` — recent bills, bill by id, full bill listing
//!   - `TotalBillService` — totals by category, total by id
//!   - `PaymentService` — create, list by email, update, delete
//! - Decide not-found and bad-request outcomes without knowing *how*
//!   persistence or HTTP works
//!
//! ## Dependency rule
//! Depends on `paybill-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;
