//! Phone entity (database row mapping).

use domain::models::Phone;
use sqlx::FromRow;

/// Database row mapping for the phone table.
#[derive(Debug, Clone, FromRow)]
pub struct PhoneEntity {
    pub phone_id: i32,
    pub phone_number: Option<String>,
    pub customer_id: i32,
}

impl From<PhoneEntity> for Phone {
    fn from(entity: PhoneEntity) -> Self {
        Self {
            phone_id: entity.phone_id,
            phone_number: entity.phone_number,
            customer_id: entity.customer_id,
        }
    }
}
