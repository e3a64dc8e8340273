//! Domain layer for the customer registry.
//!
//! This crate contains:
//! - Domain models (Customer, Phone, joined lookup rows)
//! - Input structures for partial updates and filtered lookups

pub mod models;
