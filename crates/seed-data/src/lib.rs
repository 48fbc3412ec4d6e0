//! Fixture data and seeding for the dashboard demo.
//!
//! This crate owns the four fixture datasets (users, customers, invoices and
//! monthly revenue) and the machinery that loads them into a store: a
//! PostgreSQL-backed [`Seeder`](db::Seeder) with insert-if-absent semantics and
//! a disposable in-memory [`MemorySeeder`](memory::MemorySeeder).
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use seed_data::prelude::*;
//!
//! let pool = connect(std::env::var("POSTGRES_URL").ok().as_deref(), 5)?;
//! let summary = Seeder::new(pool)
//!     .seed_all(&Fixtures::placeholder())
//!     .await?;
//! ```

pub mod db;
pub mod fixtures;
pub mod memory;
pub mod models;
pub mod password;

pub use db::SeedError;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::db::{
        Database, SeedError, SeedSummary, Seeder, Statement, StepReport, Value, connect,
    };
    pub use crate::fixtures::Fixtures;
    pub use crate::memory::{MemoryCounts, MemorySeeder, MemoryStore};
    pub use crate::models::{Customer, Invoice, InvoiceStatus, RevenueSample, User};
    pub use crate::password::{hash_password, verify_password};
}
