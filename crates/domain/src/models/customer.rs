//! Customer domain model.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Represents a customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

/// A phone row joined with its owning customer, as returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPhone {
    pub customer_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_id: i32,
    pub phone_number: Option<String>,
}

/// Input for inserting a customer. Every field is nullable in storage.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[validate(length(min = 1, max = 40, message = "First name must be 1-40 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 40, message = "Last name must be 1-40 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 40, message = "Email must be at most 40 characters"))]
    pub email: Option<String>,
}

impl CreateCustomerRequest {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }
}

/// Columns of the customer table that may be changed after insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerField {
    FirstName,
    LastName,
    Email,
}

impl CustomerField {
    /// Column name in the customer table.
    pub fn column(&self) -> &'static str {
        match self {
            CustomerField::FirstName => "first_name",
            CustomerField::LastName => "last_name",
            CustomerField::Email => "email",
        }
    }
}

/// Partial update of a customer.
///
/// Absent fields are left untouched; there is no way to reset a column to NULL.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[validate(length(min = 1, max = 40, message = "First name must be 1-40 characters"))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 40, message = "Last name must be 1-40 characters"))]
    pub last_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 40, message = "Email must be at most 40 characters"))]
    pub email: Option<String>,
}

impl UpdateCustomerRequest {
    /// Present fields in column order, each paired with its new value.
    pub fn changes(&self) -> Vec<(CustomerField, &str)> {
        [
            (CustomerField::FirstName, self.first_name.as_deref()),
            (CustomerField::LastName, self.last_name.as_deref()),
            (CustomerField::Email, self.email.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none() && self.last_name.is_none() && self.email.is_none()
    }
}

/// Optional filters for a customer lookup. Present filters are combined with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerFilter {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl CustomerFilter {
    pub fn by_first_name(first_name: impl Into<String>) -> Self {
        Self {
            first_name: Some(first_name.into()),
            ..Default::default()
        }
    }

    pub fn by_last_name(last_name: impl Into<String>) -> Self {
        Self {
            last_name: Some(last_name.into()),
            ..Default::default()
        }
    }

    pub fn by_email(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Default::default()
        }
    }

    pub fn by_phone_number(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: Some(phone_number.into()),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone_number.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_customer_request_validation() {
        let request = CreateCustomerRequest::new("Maria", "Plotnikova", "mary@example.com");
        assert!(request.validate().is_ok());

        let request = CreateCustomerRequest::new("Maria", "Plotnikova", "not-an-email");
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_customer_request_too_long() {
        let request = CreateCustomerRequest::new("M".repeat(41), "P", "m@example.com");
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("first_name"));
    }

    #[test]
    fn test_create_customer_request_all_absent_is_valid() {
        assert!(CreateCustomerRequest::default().validate().is_ok());
    }

    #[test]
    fn test_update_changes_only_present_fields() {
        let request = UpdateCustomerRequest {
            last_name: Some("Z".to_string()),
            ..Default::default()
        };
        assert_eq!(request.changes(), vec![(CustomerField::LastName, "Z")]);
        assert!(!request.is_empty());
    }

    #[test]
    fn test_update_changes_keep_column_order() {
        let request = UpdateCustomerRequest {
            first_name: Some("A".to_string()),
            last_name: None,
            email: Some("a@example.com".to_string()),
        };
        let columns: Vec<&str> = request.changes().iter().map(|(f, _)| f.column()).collect();
        assert_eq!(columns, vec!["first_name", "email"]);
    }

    #[test]
    fn test_empty_update() {
        let request = UpdateCustomerRequest::default();
        assert!(request.is_empty());
        assert!(request.changes().is_empty());
    }

    #[test]
    fn test_filter_constructors() {
        assert!(CustomerFilter::default().is_empty());
        let filter = CustomerFilter::by_phone_number("5551234567");
        assert_eq!(filter.phone_number.as_deref(), Some("5551234567"));
        assert!(filter.first_name.is_none());
        assert!(!filter.is_empty());
    }

    #[test]
    fn test_filter_deserialization() {
        let json = r#"{"first_name": "Viktor", "email": "v@example.com"}"#;
        let filter: CustomerFilter = serde_json::from_str(json).unwrap();
        assert_eq!(filter.first_name.as_deref(), Some("Viktor"));
        assert_eq!(filter.email.as_deref(), Some("v@example.com"));
        assert!(filter.last_name.is_none());
        assert!(filter.phone_number.is_none());
    }

    #[test]
    fn test_customer_phone_serialization() {
        let row = CustomerPhone {
            customer_id: 1,
            first_name: Some("Maria".to_string()),
            last_name: Some("P".to_string()),
            email: None,
            phone_id: 7,
            phone_number: Some("5551234567".to_string()),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"first_name\":\"Maria\""));
        assert!(json.contains("\"email\":null"));
        assert!(json.contains("\"phone_id\":7"));
    }
}
