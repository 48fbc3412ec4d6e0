//! Seeds the dashboard database from the command line.
//!
//! Run with:
//! ```
//! POSTGRES_URL=postgres://... cargo run -p seed-data --bin seed
//! ```
//!
//! `SEED_FIXTURES=path/to/fixtures.json` replaces the built-in data set and
//! `SEED_RESET=1` empties the four tables first.

use seed_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let database_url = std::env::var("POSTGRES_URL").ok();
    let pool = connect(database_url.as_deref(), 5)?;
    let seeder = Seeder::new(pool);

    let fixtures = match std::env::var("SEED_FIXTURES") {
        Ok(path) => {
            tracing::info!("Loading fixtures from {}", path);
            Fixtures::from_json_file(path)?
        }
        Err(_) => Fixtures::placeholder(),
    };

    if std::env::var("SEED_RESET").is_ok_and(|v| v == "1" || v == "true") {
        seeder.check_connection().await?;
        seeder.clear_all().await?;
    }

    let summary = seeder.seed_all(&fixtures).await?;

    // Summary output
    tracing::info!("Seed completed!");
    for (table, report) in [
        ("Users", summary.users),
        ("Customers", summary.customers),
        ("Invoices", summary.invoices),
        ("Revenue", summary.revenue),
    ] {
        tracing::info!(
            "  {}: {} attempted, {} inserted",
            table,
            report.attempted,
            report.inserted
        );
    }

    Ok(())
}
