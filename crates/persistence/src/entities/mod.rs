//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod customer;
pub mod phone;

pub use customer::{CustomerEntity, CustomerPhoneEntity};
pub use phone::PhoneEntity;
