//! Integration tests for seeding a real PostgreSQL database.
//!
//! These tests verify:
//! - Re-seeding leaves users, customers and revenue row counts unchanged
//! - Stored passwords are bcrypt hashes of the fixture passwords
//! - A duplicated revenue month is stored once
//! - Invoices accumulate across runs
//!
//! To run these tests, you need a PostgreSQL 13+ database and the
//! DATABASE_URL environment variable set.
//!
//! Run with: `DATABASE_URL=postgres://... cargo nextest run -p seed-data --test postgres_seeding`
//!
//! Note: These tests only insert fixture rows and never delete, so they can
//! safely run against a development database. They run serially because
//! concurrent `CREATE TABLE IF NOT EXISTS` can race in PostgreSQL.

use seed_data::prelude::*;
use serial_test::serial;
use sqlx::PgPool;
use std::env;

/// Get a seeder, skipping tests if DATABASE_URL is not set.
async fn get_test_seeder() -> Option<Seeder> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    let pool = match connect(Some(&database_url), 2) {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("Skipping test: Invalid DATABASE_URL: {e}");
            return None;
        }
    };

    let seeder = Seeder::new(pool);
    match seeder.check_connection().await {
        Ok(()) => Some(seeder),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    let (n,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .expect("Failed to count rows");
    n
}

#[tokio::test]
#[serial]
async fn test_reseeding_is_idempotent_except_invoices() {
    let Some(seeder) = get_test_seeder().await else {
        return;
    };
    let fixtures = Fixtures::placeholder();
    let pool = seeder.database();

    seeder.seed_all(&fixtures).await.expect("First seed failed");
    let users = count(pool, "users").await;
    let customers = count(pool, "customers").await;
    let invoices = count(pool, "invoices").await;
    let revenue = count(pool, "revenue").await;

    let summary = seeder.seed_all(&fixtures).await.expect("Second seed failed");

    assert_eq!(count(pool, "users").await, users);
    assert_eq!(count(pool, "customers").await, customers);
    assert_eq!(count(pool, "revenue").await, revenue);
    assert_eq!(summary.users.inserted, 0);
    assert_eq!(summary.customers.inserted, 0);
    assert_eq!(summary.revenue.inserted, 0);

    // Invoice ids are generated per run, so each run adds a copy
    assert_eq!(
        count(pool, "invoices").await,
        invoices + fixtures.invoices.len() as i64
    );
}

#[tokio::test]
#[serial]
async fn test_stored_passwords_verify() {
    let Some(seeder) = get_test_seeder().await else {
        return;
    };
    let fixtures = Fixtures::placeholder();
    seeder.seed_all(&fixtures).await.expect("Seed failed");

    for user in &fixtures.users {
        let (stored,): (String,) = sqlx::query_as("SELECT password FROM users WHERE id = $1")
            .bind(user.id)
            .fetch_one(seeder.database())
            .await
            .expect("Seeded user missing");

        assert_ne!(stored, user.password);
        assert!(verify_password(&user.password, &stored).unwrap());
    }
}

#[tokio::test]
#[serial]
async fn test_duplicate_month_stored_once() {
    let Some(seeder) = get_test_seeder().await else {
        return;
    };
    seeder.ensure_schema().await.expect("Schema failed");

    let rows = vec![
        RevenueSample {
            month: "Jan".to_string(),
            revenue: 2000,
        },
        RevenueSample {
            month: "Jan".to_string(),
            revenue: 9999,
        },
    ];

    let report = seeder.seed_revenue(&rows).await.expect("Seed failed");
    assert_eq!(report.attempted, 2);
    assert!(report.inserted <= 1);

    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM revenue WHERE month = 'Jan'")
        .fetch_one(seeder.database())
        .await
        .unwrap();
    assert_eq!(n, 1);
}
