//! Schema bootstrap for the customer and phone tables.

/// Customer table. Names and email are nullable and unconstrained.
pub const CREATE_CUSTOMER_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS customer (
    customer_id SERIAL PRIMARY KEY,
    first_name VARCHAR(40),
    last_name VARCHAR(40),
    email VARCHAR(40)
)
"#;

/// Phone table. Rows follow their owner on delete.
pub const CREATE_PHONE_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS phone (
    phone_id SERIAL PRIMARY KEY,
    phone_number VARCHAR(10),
    customer_id INTEGER NOT NULL REFERENCES customer(customer_id) ON DELETE CASCADE
)
"#;

/// Statements in the order they must run.
pub const SCHEMA_STATEMENTS: [&str; 2] = [CREATE_CUSTOMER_TABLE, CREATE_PHONE_TABLE];
