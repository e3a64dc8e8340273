//! Customer repository for database operations.
//!
//! Every mutating call runs inside its own transaction and commits only after
//! all of its statements succeeded. Errors are returned as-is.

use domain::models::{
    CreateCustomerRequest, Customer, CustomerFilter, CustomerPhone, Phone, UpdateCustomerRequest,
};
use sqlx::PgPool;
use tracing::{debug, info};

use crate::entities::{CustomerEntity, CustomerPhoneEntity, PhoneEntity};
use crate::metrics::QueryTimer;
use crate::schema::SCHEMA_STATEMENTS;

/// Builds the WHERE clause of a customer lookup from the filters that are present.
struct CustomerFilterBuilder {
    conditions: Vec<String>,
    param_count: i32,
}

impl CustomerFilterBuilder {
    fn build(filter: &CustomerFilter) -> Self {
        let mut conditions = Vec::new();
        let mut param_count = 0;

        if filter.first_name.is_some() {
            param_count += 1;
            conditions.push(format!("c.first_name = ${}", param_count));
        }

        if filter.last_name.is_some() {
            param_count += 1;
            conditions.push(format!("c.last_name = ${}", param_count));
        }

        if filter.email.is_some() {
            param_count += 1;
            conditions.push(format!("c.email = ${}", param_count));
        }

        if filter.phone_number.is_some() {
            param_count += 1;
            conditions.push(format!("p.phone_number = ${}", param_count));
        }

        Self {
            conditions,
            param_count,
        }
    }

    /// Conjunction of the present filters; `TRUE` when there are none.
    fn where_clause(&self) -> String {
        if self.conditions.is_empty() {
            "TRUE".to_string()
        } else {
            self.conditions.join(" AND ")
        }
    }

    fn param_count(&self) -> i32 {
        self.param_count
    }
}

/// Binds the present filter values in the same order the builder numbered them.
macro_rules! bind_customer_filters {
    ($builder:expr, $filter:expr) => {{
        let mut b = $builder;
        if let Some(ref first_name) = $filter.first_name {
            b = b.bind(first_name);
        }
        if let Some(ref last_name) = $filter.last_name {
            b = b.bind(last_name);
        }
        if let Some(ref email) = $filter.email {
            b = b.bind(email);
        }
        if let Some(ref phone_number) = $filter.phone_number {
            b = b.bind(phone_number);
        }
        b
    }};
}

fn find_customers_sql(builder: &CustomerFilterBuilder) -> String {
    format!(
        r#"
        SELECT c.customer_id, c.first_name, c.last_name, c.email, p.phone_id, p.phone_number
        FROM phone p
        JOIN customer c ON p.customer_id = c.customer_id
        WHERE {}
        ORDER BY c.customer_id, p.phone_id
        "#,
        builder.where_clause()
    )
}

fn update_field_sql(column: &str) -> String {
    format!(
        "UPDATE customer SET {} = $1 WHERE customer_id = $2",
        column
    )
}

/// Repository for customer and phone database operations.
#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Create the customer and phone tables if they do not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        let timer = QueryTimer::new("ensure_schema");
        let mut tx = self.pool.begin().await?;

        for statement in SCHEMA_STATEMENTS {
            sqlx::query(statement).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        timer.record();
        info!("Customer schema is in place");
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Insert a customer and return its generated id.
    pub async fn add_customer(&self, input: &CreateCustomerRequest) -> Result<i32, sqlx::Error> {
        let timer = QueryTimer::new("add_customer");
        let mut tx = self.pool.begin().await?;

        let customer_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO customer (first_name, last_name, email)
            VALUES ($1, $2, $3)
            RETURNING customer_id
            "#,
        )
        .bind(&input.first_name)
        .bind(&input.last_name)
        .bind(&input.email)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        debug!(customer_id, "Customer added");
        Ok(customer_id)
    }

    /// Attach a phone number to a customer and return the generated phone id.
    ///
    /// Fails with a foreign key violation when the customer does not exist.
    pub async fn add_phone(&self, customer_id: i32, phone_number: &str) -> Result<i32, sqlx::Error> {
        let timer = QueryTimer::new("add_phone");
        let mut tx = self.pool.begin().await?;

        let phone_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO phone (customer_id, phone_number)
            VALUES ($1, $2)
            RETURNING phone_id
            "#,
        )
        .bind(customer_id)
        .bind(phone_number)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        timer.record();
        debug!(customer_id, phone_id, "Phone added");
        Ok(phone_id)
    }

    /// Overwrite the supplied customer fields, one statement per field.
    ///
    /// Absent fields keep their stored value. Returns the summed row count,
    /// so an unknown customer yields 0.
    pub async fn update_customer(
        &self,
        customer_id: i32,
        input: &UpdateCustomerRequest,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("update_customer");
        let mut tx = self.pool.begin().await?;
        let mut rows_affected = 0;

        for (field, value) in input.changes() {
            let sql = update_field_sql(field.column());
            rows_affected += sqlx::query(&sql)
                .bind(value)
                .bind(customer_id)
                .execute(&mut *tx)
                .await?
                .rows_affected();
        }

        tx.commit().await?;
        timer.record();
        debug!(customer_id, rows_affected, "Customer updated");
        Ok(rows_affected)
    }

    /// Delete the phone rows of a customer that carry exactly this number.
    pub async fn delete_phone(
        &self,
        customer_id: i32,
        phone_number: &str,
    ) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_phone");
        let mut tx = self.pool.begin().await?;

        let rows_affected = sqlx::query(
            "DELETE FROM phone WHERE customer_id = $1 AND phone_number = $2",
        )
        .bind(customer_id)
        .bind(phone_number)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        tx.commit().await?;
        timer.record();
        debug!(customer_id, rows_affected, "Phone deleted");
        Ok(rows_affected)
    }

    /// Delete a customer. Its phones are removed by the cascading foreign key.
    pub async fn delete_customer(&self, customer_id: i32) -> Result<u64, sqlx::Error> {
        let timer = QueryTimer::new("delete_customer");
        let mut tx = self.pool.begin().await?;

        let rows_affected = sqlx::query("DELETE FROM customer WHERE customer_id = $1")
            .bind(customer_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        tx.commit().await?;
        timer.record();
        debug!(customer_id, rows_affected, "Customer deleted");
        Ok(rows_affected)
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Find phone/customer rows matching every supplied filter.
    ///
    /// With no filters, every phone is returned together with its customer.
    /// Customers without phones never appear.
    pub async fn find_customers(
        &self,
        filter: &CustomerFilter,
    ) -> Result<Vec<CustomerPhone>, sqlx::Error> {
        let timer = QueryTimer::new("find_customers");
        let filter_builder = CustomerFilterBuilder::build(filter);
        let sql = find_customers_sql(&filter_builder);
        debug!(filters = filter_builder.param_count(), "Finding customers");

        let builder = sqlx::query_as::<_, CustomerPhoneEntity>(&sql);
        let builder = bind_customer_filters!(builder, filter);
        let result = builder.fetch_all(&self.pool).await;
        timer.record();

        Ok(result?.into_iter().map(CustomerPhone::from).collect())
    }

    /// Find a customer by id.
    pub async fn find_by_id(&self, customer_id: i32) -> Result<Option<Customer>, sqlx::Error> {
        let timer = QueryTimer::new("find_customer_by_id");
        let result = sqlx::query_as::<_, CustomerEntity>(
            r#"
            SELECT customer_id, first_name, last_name, email
            FROM customer
            WHERE customer_id = $1
            "#,
        )
        .bind(customer_id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();

        Ok(result?.map(Customer::from))
    }

    /// List the phones owned by a customer.
    pub async fn phones_for_customer(&self, customer_id: i32) -> Result<Vec<Phone>, sqlx::Error> {
        let timer = QueryTimer::new("phones_for_customer");
        let result = sqlx::query_as::<_, PhoneEntity>(
            r#"
            SELECT phone_id, phone_number, customer_id
            FROM phone
            WHERE customer_id = $1
            ORDER BY phone_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();

        Ok(result?.into_iter().map(Phone::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_builder_without_filters() {
        let builder = CustomerFilterBuilder::build(&CustomerFilter::default());
        assert_eq!(builder.where_clause(), "TRUE");
        assert_eq!(builder.param_count(), 0);
    }

    #[test]
    fn test_filter_builder_single_filter() {
        let builder = CustomerFilterBuilder::build(&CustomerFilter::by_phone_number("9321436823"));
        assert_eq!(builder.where_clause(), "p.phone_number = $1");
        assert_eq!(builder.param_count(), 1);
    }

    #[test]
    fn test_filter_builder_joins_with_and() {
        let filter = CustomerFilter {
            first_name: Some("Maria".to_string()),
            last_name: Some("Plotnikova".to_string()),
            email: None,
            phone_number: Some("9321436823".to_string()),
        };
        let builder = CustomerFilterBuilder::build(&filter);
        assert_eq!(
            builder.where_clause(),
            "c.first_name = $1 AND c.last_name = $2 AND p.phone_number = $3"
        );
        assert_eq!(builder.param_count(), 3);
        assert!(!builder.where_clause().contains(" OR "));
    }

    #[test]
    fn test_filter_builder_numbers_placeholders_densely() {
        let filter = CustomerFilter {
            email: Some("zuba@example.com".to_string()),
            phone_number: Some("9121436070".to_string()),
            ..Default::default()
        };
        let builder = CustomerFilterBuilder::build(&filter);
        assert_eq!(builder.where_clause(), "c.email = $1 AND p.phone_number = $2");
    }

    #[test]
    fn test_find_customers_sql_never_embeds_values() {
        let filter = CustomerFilter::by_first_name("Robert'); DROP TABLE customer;--");
        let sql = find_customers_sql(&CustomerFilterBuilder::build(&filter));
        assert!(sql.contains("c.first_name = $1"));
        assert!(!sql.contains("DROP TABLE"));
        assert!(sql.contains("JOIN customer c ON p.customer_id = c.customer_id"));
    }

    #[test]
    fn test_update_field_sql() {
        assert_eq!(
            update_field_sql("last_name"),
            "UPDATE customer SET last_name = $1 WHERE customer_id = $2"
        );
    }
}
