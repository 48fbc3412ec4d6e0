//! Connection acquisition.

use std::net::IpAddr;
use std::str::FromStr;

use sqlx::PgPool;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use tracing::debug;

use super::SeedError;

/// Builds a lazily-connecting pool for `database_url`.
///
/// Loopback hosts get TLS disabled; every other host requires it. A missing
/// or empty URL is a configuration error.
pub fn connect(database_url: Option<&str>, max_connections: u32) -> Result<PgPool, SeedError> {
    let database_url = database_url
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            SeedError::Configuration("POSTGRES_URL environment variable is not set".to_string())
        })?;

    let options = PgConnectOptions::from_str(database_url)?;
    let ssl_mode = if is_loopback_host(options.get_host()) {
        PgSslMode::Disable
    } else {
        PgSslMode::Require
    };
    debug!(host = options.get_host(), ?ssl_mode, "Configuring database connection");

    Ok(PgPoolOptions::new()
        .max_connections(max_connections)
        .connect_lazy_with(options.ssl_mode(ssl_mode)))
}

/// True for `localhost` and any loopback IP literal.
pub fn is_loopback_host(host: &str) -> bool {
    if host.eq_ignore_ascii_case("localhost") {
        return true;
    }
    host.trim_start_matches('[')
        .trim_end_matches(']')
        .parse::<IpAddr>()
        .is_ok_and(|ip| ip.is_loopback())
}
