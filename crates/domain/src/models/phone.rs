//! Phone domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

// Phone numbers are stored as ten digits without separators.
lazy_static::lazy_static! {
    pub static ref PHONE_NUMBER_REGEX: regex::Regex = regex::Regex::new(r"^\d{10}$").unwrap();
}

/// Represents a phone row owned by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phone {
    pub phone_id: i32,
    pub phone_number: Option<String>,
    pub customer_id: i32,
}

/// Input for attaching a phone number to an existing customer.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddPhoneRequest {
    pub customer_id: i32,

    #[validate(regex(path = "*PHONE_NUMBER_REGEX", message = "Phone number must be exactly 10 digits"))]
    pub phone_number: String,
}

/// Identifies the phone rows to remove: same owner and same number.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DeletePhoneRequest {
    pub customer_id: i32,

    #[validate(regex(path = "*PHONE_NUMBER_REGEX", message = "Phone number must be exactly 10 digits"))]
    pub phone_number: String,
}
