//! Repository implementations for database operations.

pub mod customer;

pub use customer::CustomerRepository;
