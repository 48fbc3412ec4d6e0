//! Database seeding utilities.

use futures::future::join_all;
use sqlx::PgPool;
use thiserror::Error;
use tracing::{error, info};

use super::{Database, Statement, Table};
use crate::fixtures::Fixtures;
use crate::models::{Customer, Invoice, RevenueSample, User};
use crate::password::hash_password_blocking;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("{0}")]
    Configuration(String),
    #[error("Database connection check failed: {0}")]
    Connectivity(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),
    #[error("Password hashing task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("Invalid fixtures: {0}")]
    Fixtures(String),
}

/// Outcome of one seeding step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    /// Rows an insert was issued for.
    pub attempted: usize,
    /// Rows the store actually wrote; the rest already existed.
    pub inserted: u64,
}

/// Per-table reports from [`Seeder::seed_all`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: StepReport,
    pub customers: StepReport,
    pub invoices: StepReport,
    pub revenue: StepReport,
}

/// Inserts fixture rows, leaving rows whose key already exists untouched.
pub struct Seeder<D = PgPool> {
    db: D,
}

impl<D: Database> Seeder<D> {
    /// Creates a new seeder over the given database handle.
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// Fails with [`SeedError::Connectivity`] if the store does not answer.
    pub async fn check_connection(&self) -> Result<(), SeedError> {
        self.db
            .execute(Statement::new("SELECT 1"))
            .await
            .map_err(|e| SeedError::Connectivity(e.to_string()))?;
        Ok(())
    }

    /// Creates all four tables if they are missing.
    pub async fn ensure_schema(&self) -> Result<(), SeedError> {
        for table in Table::ALL {
            self.db.execute(table.create_statement()).await?;
        }
        Ok(())
    }

    /// Runs every step in order: users, customers, invoices, revenue.
    ///
    /// Stops at the first failing step. Steps that already finished stay
    /// committed.
    pub async fn seed_all(&self, fixtures: &Fixtures) -> Result<SeedSummary, SeedError> {
        self.check_connection().await?;

        info!("Starting database seeding...");
        let summary = SeedSummary {
            users: self.seed_users(&fixtures.users).await?,
            customers: self.seed_customers(&fixtures.customers).await?,
            invoices: self.seed_invoices(&fixtures.invoices).await?,
            revenue: self.seed_revenue(&fixtures.revenue).await?,
        };
        info!("Database seeded successfully!");

        Ok(summary)
    }

    /// Seeds users, hashing each password before its insert.
    pub async fn seed_users(&self, users: &[User]) -> Result<StepReport, SeedError> {
        info!("Seeding {} users...", users.len());

        self.seed_step(Table::Users, users, |user| async move {
            let hashed = hash_password_blocking(user.password.clone()).await?;
            Ok(Statement::new(
                r#"
                INSERT INTO users (id, name, email, password)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(user.id)
            .bind(user.name.as_str())
            .bind(user.email.as_str())
            .bind(hashed))
        })
        .await
    }

    /// Seeds customers.
    pub async fn seed_customers(&self, customers: &[Customer]) -> Result<StepReport, SeedError> {
        info!("Seeding {} customers...", customers.len());

        self.seed_step(Table::Customers, customers, |customer| async move {
            Ok(Statement::new(
                r#"
                INSERT INTO customers (id, name, email, image_url)
                VALUES ($1, $2, $3, $4)
                ON CONFLICT (id) DO NOTHING
                "#,
            )
            .bind(customer.id)
            .bind(customer.name.as_str())
            .bind(customer.email.as_str())
            .bind(customer.image_url.as_str()))
        })
        .await
    }

    /// Seeds invoices.
    ///
    /// Invoices without an id get a fresh one from the store, so repeated runs
    /// add another copy of each.
    pub async fn seed_invoices(&self, invoices: &[Invoice]) -> Result<StepReport, SeedError> {
        info!("Seeding {} invoices...", invoices.len());

        self.seed_step(Table::Invoices, invoices, |invoice| async move {
            let statement = match invoice.id {
                Some(id) => Statement::new(
                    r#"
                    INSERT INTO invoices (id, customer_id, amount, status, date)
                    VALUES ($1, $2, $3, $4, $5)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                )
                .bind(id),
                None => Statement::new(
                    r#"
                    INSERT INTO invoices (customer_id, amount, status, date)
                    VALUES ($1, $2, $3, $4)
                    ON CONFLICT (id) DO NOTHING
                    "#,
                ),
            };
            Ok(statement
                .bind(invoice.customer_id)
                .bind(invoice.amount)
                .bind(invoice.status.as_str())
                .bind(invoice.date))
        })
        .await
    }

    /// Seeds monthly revenue. A month that is already present is skipped.
    pub async fn seed_revenue(&self, revenue: &[RevenueSample]) -> Result<StepReport, SeedError> {
        info!("Seeding {} revenue months...", revenue.len());

        self.seed_step(Table::Revenue, revenue, |sample| async move {
            Ok(Statement::new(
                r#"
                INSERT INTO revenue (month, revenue)
                VALUES ($1, $2)
                ON CONFLICT (month) DO NOTHING
                "#,
            )
            .bind(sample.month.as_str())
            .bind(sample.revenue))
        })
        .await
    }

    /// Creates `table`, then inserts every row concurrently and waits for all
    /// of them. A failing row does not cancel its siblings; the first failure
    /// is reported once every row has finished.
    async fn seed_step<'r, T, F, Fut>(
        &self,
        table: Table,
        rows: &'r [T],
        build: F,
    ) -> Result<StepReport, SeedError>
    where
        F: Fn(&'r T) -> Fut,
        Fut: Future<Output = Result<Statement, SeedError>>,
    {
        let result = async {
            self.db.execute(table.create_statement()).await?;

            let counts = join_all(rows.iter().map(|row| {
                let statement = build(row);
                async move { self.db.execute(statement.await?).await }
            }))
            .await
            .into_iter()
            .collect::<Result<Vec<u64>, _>>()?;

            Ok::<_, SeedError>(StepReport {
                attempted: rows.len(),
                inserted: counts.iter().sum(),
            })
        }
        .await;

        match &result {
            Ok(report) => info!(
                table = table.as_str(),
                attempted = report.attempted,
                inserted = report.inserted,
                "Seeded {}",
                table.as_str()
            ),
            Err(e) => error!(table = table.as_str(), error = %e, "Error seeding {}", table.as_str()),
        }

        result
    }

    /// Deletes every seeded row from all four tables in one transaction.
    ///
    /// **WARNING**: This deletes all data from the tables. Use with caution.
    pub async fn clear_all(&self) -> Result<u64, SeedError> {
        info!("Clearing all seeded data...");

        self.ensure_schema().await?;
        let deleted = self
            .db
            .transaction(Table::ALL.iter().rev().map(Table::delete_statement).collect())
            .await?;

        info!(deleted, "All data cleared");
        Ok(deleted)
    }

    /// Returns a reference to the database handle for advanced usage.
    pub fn database(&self) -> &D {
        &self.db
    }
}
