//! Application services — use-case implementations.
//!
//! Each service struct accepts a [`DocumentStore`](crate::ports::DocumentStore)
//! via a generic parameter (constructor injection), keeping this layer
//! decoupled from concrete adapters.

pub mod bill_service;
pub mod payment_service;
pub mod total_bill_service;
