//! HTTP request handlers for the dashboard seeding API.

pub mod seed;
pub mod status;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use seed::{__path_seed_database, __path_seed_in_memory, seed_database, seed_in_memory};
pub use status::{__path_health_check, __path_server_status, health_check, server_status};
