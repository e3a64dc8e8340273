//! Persistence layer for the customer registry.
//!
//! This crate contains:
//! - Database connection management
//! - Schema bootstrap for the customer and phone tables
//! - Entity definitions (database row mappings)
//! - Repository implementations

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
pub mod schema;
