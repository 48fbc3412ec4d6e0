//! Response types for API endpoints.

use seed_data::memory::MemoryCounts;
use serde::Serialize;
use utoipa::ToSchema;

/// Plain success message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Failure body shared by both seed endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

/// Rows held by the in-memory store after seeding.
#[derive(Debug, Serialize, ToSchema)]
pub struct SeedCounts {
    pub users: usize,
    pub customers: usize,
    pub invoices: usize,
    pub revenue: usize,
}

impl From<MemoryCounts> for SeedCounts {
    fn from(counts: MemoryCounts) -> Self {
        Self {
            users: counts.users,
            customers: counts.customers,
            invoices: counts.invoices,
            revenue: counts.revenue,
        }
    }
}

/// In-memory seed response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MemorySeedResponse {
    pub message: String,
    pub data: SeedCounts,
}

/// Server status response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    pub message: String,
    /// RFC 3339 time the response was produced.
    pub timestamp: String,
    pub env: EnvStatus,
}

/// Which configuration is present. Values are never echoed.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EnvStatus {
    pub has_postgres_url: bool,
    /// "Set (hidden)" or "Not set"
    pub postgres_url_value: String,
}
