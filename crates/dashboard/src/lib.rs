pub mod config;
pub mod errors;
pub mod handlers;
pub mod request_id;
pub mod types;

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use seed_data::prelude::{Fixtures, MemoryStore};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    config::AppConfig,
    handlers::{
        __path_health_check, __path_seed_database, __path_seed_in_memory, __path_server_status,
        health_check, seed_database, seed_in_memory, server_status,
    },
    request_id::request_id_middleware,
    types::{
        EnvStatus, ErrorResponse, MemorySeedResponse, MessageResponse, SeedCounts, StatusResponse,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(seed_database, seed_in_memory, server_status, health_check),
    components(schemas(
        MessageResponse,
        ErrorResponse,
        SeedCounts,
        MemorySeedResponse,
        StatusResponse,
        EnvStatus
    )),
    tags(
        (name = "seed", description = "Fixture seeding"),
        (name = "status", description = "Liveness and configuration")
    )
)]
pub struct ApiDoc;

pub fn create_router(config: AppConfig, fixtures: Fixtures, memory: MemoryStore) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/test", get(server_status))
        .route("/seed", get(seed_database))
        .route("/seed-inmemory", get(seed_in_memory))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(Arc::new(config)))
        .layer(Extension(Arc::new(fixtures)))
        .layer(Extension(memory))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(config: AppConfig) -> anyhow::Result<()> {
    let port = config.port;
    let app = create_router(config, Fixtures::placeholder(), MemoryStore::new());

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
