//! Common test utilities for repository integration tests.
//!
//! Each test gets its own freshly created schema on the database named by
//! `TEST_DATABASE_URL`, so generated ids start at 1 and tests never see each
//! other's rows. Tests are skipped when the variable is not set.

#![allow(dead_code)]

use domain::models::CreateCustomerRequest;
use persistence::db::{create_pool, DatabaseConfig};
use persistence::repositories::CustomerRepository;
use sqlx::{postgres::PgPoolOptions, PgPool};

/// A repository bound to an isolated schema.
pub struct TestDb {
    pub repo: CustomerRepository,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    /// Pool that resolves unqualified table names inside the test schema.
    pub fn pool(&self) -> &PgPool {
        self.repo.pool()
    }

    /// Count phone rows owned by a customer, bypassing the repository.
    pub async fn count_phones(&self, customer_id: i32) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM phone WHERE customer_id = $1")
            .bind(customer_id)
            .fetch_one(self.pool())
            .await
            .expect("Failed to count phones")
    }

    /// Count every phone row in the schema.
    pub async fn count_all_phones(&self) -> i64 {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM phone")
            .fetch_one(self.pool())
            .await
            .expect("Failed to count phones")
    }

    /// Drop the schema and everything in it.
    pub async fn teardown(self) {
        self.repo.pool().close().await;
        sqlx::query(&format!("DROP SCHEMA IF EXISTS {} CASCADE", self.schema))
            .execute(&self.admin)
            .await
            .expect("Failed to drop test schema");
        self.admin.close().await;
    }
}

/// Create an isolated schema and a repository whose tables already exist.
///
/// Returns `None` when `TEST_DATABASE_URL` is not set.
pub async fn setup() -> Option<TestDb> {
    let db = setup_without_schema().await?;
    db.repo
        .ensure_schema()
        .await
        .expect("Failed to create customer schema");
    Some(db)
}

/// Like [`setup`] but leaves the test schema empty.
pub async fn setup_without_schema() -> Option<TestDb> {
    let Ok(url) = std::env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL is not set, skipping database test");
        return None;
    };

    let admin = PgPoolOptions::new()
        .max_connections(1)
        .connect(&url)
        .await
        .expect("Failed to connect to test database");

    let schema = format!("customer_test_{}", uuid::Uuid::new_v4().simple());
    sqlx::query(&format!("CREATE SCHEMA {}", schema))
        .execute(&admin)
        .await
        .expect("Failed to create test schema");

    let config = DatabaseConfig {
        url,
        schema: Some(schema.clone()),
        max_connections: 5,
        min_connections: 0,
        connect_timeout_secs: 30,
        idle_timeout_secs: 60,
    };
    let pool = create_pool(&config)
        .await
        .expect("Failed to create test pool");

    Some(TestDb {
        repo: CustomerRepository::new(pool),
        admin,
        schema,
    })
}

/// Phones attached by [`seed_demo_customers`], as (customer index, number).
pub const DEMO_PHONES: [(usize, &str); 9] = [
    (0, "9321436823"),
    (0, "9321427823"),
    (1, "9121436070"),
    (2, "9500013129"),
    (3, "9092788800"),
    (3, "9001368018"),
    (4, "9119283467"),
    (5, "9329009999"),
    (5, "9329209303"),
];

/// Insert six demo customers with their phones. Returns the customer ids in
/// insertion order.
pub async fn seed_demo_customers(repo: &CustomerRepository) -> Vec<i32> {
    let customers = [
        ("Maria", "Plotnikova", "MaryPlotnik@smth.com"),
        ("Dmitry", "Zubarev", "Zuba@smth.com"),
        ("Maxim", "Minimumov", "MaxMin@smth.com"),
        ("Nina", "Ivanova", "IvaNina@smth.com"),
        ("Elizaveta", "Smirnova", "ElizavetaSmirnova@smth.com"),
        ("Viktor", "Kravets", "ViktorKravec@smth.com"),
    ];

    let mut ids = Vec::with_capacity(customers.len());
    for (first, last, email) in customers {
        let id = repo
            .add_customer(&CreateCustomerRequest::new(first, last, email))
            .await
            .expect("Failed to add demo customer");
        ids.push(id);
    }

    for (index, number) in DEMO_PHONES {
        repo.add_phone(ids[index], number)
            .await
            .expect("Failed to add demo phone");
    }

    ids
}

/// SQLSTATE of a database error, if the error came from the database.
pub fn sqlstate(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|code| code.into_owned()),
        _ => None,
    }
}
