//! Customer entities (database row mappings).

use domain::models::{Customer, CustomerPhone};
use sqlx::FromRow;

/// Database row mapping for the customer table.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerEntity {
    pub customer_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
}

impl From<CustomerEntity> for Customer {
    fn from(entity: CustomerEntity) -> Self {
        Self {
            customer_id: entity.customer_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
        }
    }
}

/// A phone row joined with its customer.
#[derive(Debug, Clone, FromRow)]
pub struct CustomerPhoneEntity {
    pub customer_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_id: i32,
    pub phone_number: Option<String>,
}

impl From<CustomerPhoneEntity> for CustomerPhone {
    fn from(entity: CustomerPhoneEntity) -> Self {
        Self {
            customer_id: entity.customer_id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            email: entity.email,
            phone_id: entity.phone_id,
            phone_number: entity.phone_number,
        }
    }
}
