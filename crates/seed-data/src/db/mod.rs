//! Database integration for seeding fixture data.
//!
//! The [`Seeder`] inserts fixtures through the narrow [`Database`] capability,
//! which `sqlx::PgPool` implements. [`connect`] builds that pool from a
//! connection string.

mod connect;
mod schema;
mod seeder;
mod statement;

pub use connect::{connect, is_loopback_host};
pub use schema::Table;
pub use seeder::{SeedError, SeedSummary, Seeder, StepReport};
pub use statement::{Database, Statement, Value};
