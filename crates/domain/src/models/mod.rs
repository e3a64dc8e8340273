//! Domain models for the customer registry.

pub mod customer;
pub mod phone;

pub use customer::{
    CreateCustomerRequest, Customer, CustomerField, CustomerFilter, CustomerPhone,
    UpdateCustomerRequest,
};
pub use phone::{AddPhoneRequest, DeletePhoneRequest, Phone, PHONE_NUMBER_REGEX};
