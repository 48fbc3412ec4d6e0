//! Server configuration loaded from the environment.

use std::env;

/// Environment variable holding the PostgreSQL connection string.
pub const POSTGRES_URL_VAR: &str = "POSTGRES_URL";

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Connection string for `/seed`. Empty values count as unset.
    pub postgres_url: Option<String>,
    pub port: u16,
    /// Pool size used for each `/seed` request.
    pub max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            postgres_url: None,
            port: 3000,
            max_connections: 5,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            postgres_url: env::var(POSTGRES_URL_VAR).ok().filter(|v| !v.is_empty()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(defaults.max_connections),
        }
    }

    pub fn with_postgres_url(mut self, url: impl Into<String>) -> Self {
        self.postgres_url = Some(url.into()).filter(|v: &String| !v.is_empty());
        self
    }

    pub fn has_postgres_url(&self) -> bool {
        self.postgres_url.is_some()
    }
}
