//! Seeding handlers.

use std::sync::Arc;

use axum::{Extension, response::Json};
use seed_data::prelude::*;

use crate::{
    config::AppConfig,
    errors::AppError,
    types::{ErrorResponse, MemorySeedResponse, MessageResponse},
};

/// Seed the PostgreSQL database with the fixture data.
///
/// Rows whose key already exists are left alone. Invoices are added again on
/// every call.
#[utoipa::path(
    get,
    path = "/seed",
    tag = "seed",
    responses(
        (status = 200, description = "Database seeded", body = MessageResponse),
        (status = 500, description = "Seeding failed", body = ErrorResponse)
    )
)]
pub async fn seed_database(
    Extension(config): Extension<Arc<AppConfig>>,
    Extension(fixtures): Extension<Arc<Fixtures>>,
) -> Result<Json<MessageResponse>, AppError> {
    let pool = connect(config.postgres_url.as_deref(), config.max_connections)?;

    Seeder::new(pool).seed_all(&fixtures).await?;

    Ok(Json(MessageResponse {
        message: "Database seeded successfully".to_string(),
    }))
}

/// Seed the in-memory store. Each call appends another copy of the fixtures.
#[utoipa::path(
    get,
    path = "/seed-inmemory",
    tag = "seed",
    responses(
        (status = 200, description = "In-memory store seeded", body = MemorySeedResponse),
        (status = 500, description = "Seeding failed", body = ErrorResponse)
    )
)]
pub async fn seed_in_memory(
    Extension(store): Extension<MemoryStore>,
    Extension(fixtures): Extension<Arc<Fixtures>>,
) -> Result<Json<MemorySeedResponse>, AppError> {
    let counts = MemorySeeder::new(store).seed_all(&fixtures).await?;

    Ok(Json(MemorySeedResponse {
        message: "Database seeded successfully (in-memory)".to_string(),
        data: counts.into(),
    }))
}
