//! Process-local stand-in for the persistent store.
//!
//! [`MemoryStore`] keeps the four datasets in plain lists. Seeding appends
//! unconditionally, so every run adds another full copy of the fixtures.
//! Intended for environments without a database.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::db::SeedError;
use crate::fixtures::Fixtures;
use crate::models::User;
use crate::password::hash_password_blocking;

/// Number of rows held per table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MemoryCounts {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
}

impl MemoryCounts {
    fn of(tables: &Fixtures) -> Self {
        Self {
            users: tables.users.len(),
            customers: tables.customers.len(),
            invoices: tables.invoices.len(),
            revenue: tables.revenue.len(),
        }
    }
}

/// Shared in-memory tables. Clones share the same storage.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Fixtures>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn counts(&self) -> MemoryCounts {
        MemoryCounts::of(&*self.tables.read().await)
    }

    /// Copy of everything stored so far.
    pub async fn snapshot(&self) -> Fixtures {
        self.tables.read().await.clone()
    }
}

/// Seeds a [`MemoryStore`] in the same order as the database seeder.
pub struct MemorySeeder {
    store: MemoryStore,
}

impl MemorySeeder {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    /// Appends every dataset and returns the resulting totals.
    pub async fn seed_all(&self, fixtures: &Fixtures) -> Result<MemoryCounts, SeedError> {
        info!("Starting database seeding with in-memory storage...");

        info!("Seeding users...");
        let mut users = Vec::with_capacity(fixtures.users.len());
        for user in &fixtures.users {
            users.push(User {
                password: hash_password_blocking(user.password.clone()).await?,
                ..user.clone()
            });
        }
        // Held across all four appends.
        let mut tables = self.store.tables.write().await;
        tables.users.extend(users);

        info!("Seeding customers...");
        tables.customers.extend(fixtures.customers.iter().cloned());

        info!("Seeding invoices...");
        tables.invoices.extend(fixtures.invoices.iter().cloned());

        info!("Seeding revenue...");
        tables.revenue.extend(fixtures.revenue.iter().cloned());

        let counts = MemoryCounts::of(&tables);
        drop(tables);

        info!(?counts, "Database seeded successfully!");
        Ok(counts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::password::verify_password;

    #[tokio::test]
    async fn test_seed_counts() {
        let store = MemoryStore::new();
        let counts = MemorySeeder::new(store.clone())
            .seed_all(&Fixtures::placeholder())
            .await
            .unwrap();

        assert_eq!(
            counts,
            MemoryCounts {
                users: 1,
                customers: 6,
                invoices: 13,
                revenue: 12,
            }
        );
        assert_eq!(store.counts().await, counts);
    }

    #[tokio::test]
    async fn test_reseeding_duplicates_rows() {
        let store = MemoryStore::new();
        let seeder = MemorySeeder::new(store.clone());
        let fixtures = Fixtures::placeholder();

        let first = seeder.seed_all(&fixtures).await.unwrap();
        let second = seeder.seed_all(&fixtures).await.unwrap();

        assert_eq!(second.users, first.users * 2);
        assert_eq!(second.customers, first.customers * 2);
        assert_eq!(second.invoices, first.invoices * 2);
        assert_eq!(second.revenue, first.revenue * 2);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_concurrent_seeds_report_whole_runs() {
        let store = MemoryStore::new();
        let fixtures = Fixtures::placeholder();
        let a = MemorySeeder::new(store.clone());
        let b = MemorySeeder::new(store.clone());

        let (first, second) = tokio::join!(a.seed_all(&fixtures), b.seed_all(&fixtures));
        let (first, second) = (first.unwrap(), second.unwrap());

        let once = MemoryCounts {
            users: 1,
            customers: 6,
            invoices: 13,
            revenue: 12,
        };
        let twice = MemoryCounts {
            users: 2,
            customers: 12,
            invoices: 26,
            revenue: 24,
        };
        let mut seen = [first, second];
        seen.sort_by_key(|c| c.users);
        assert_eq!(seen, [once, twice]);
        assert_eq!(store.counts().await, twice);
    }

    #[tokio::test]
    async fn test_passwords_hashed() {
        let store = MemoryStore::new();
        let fixtures = Fixtures::placeholder();
        MemorySeeder::new(store.clone())
            .seed_all(&fixtures)
            .await
            .unwrap();

        let snapshot = store.snapshot().await;
        let stored = &snapshot.users[0];
        let plain = &fixtures.users[0];
        assert_eq!(stored.id, plain.id);
        assert_ne!(stored.password, plain.password);
        assert!(verify_password(&plain.password, &stored.password).unwrap());
    }

    #[tokio::test]
    async fn test_separate_stores_are_isolated() {
        let a = MemoryStore::new();
        let b = MemoryStore::new();
        MemorySeeder::new(a.clone())
            .seed_all(&Fixtures::placeholder())
            .await
            .unwrap();

        assert_eq!(b.counts().await, MemoryCounts::default());
        assert_eq!(a.counts().await.customers, 6);
    }
}
