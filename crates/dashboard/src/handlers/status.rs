//! Health check and status handlers.

use std::sync::Arc;

use axum::{Extension, http::StatusCode, response::Json};
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use crate::{
    config::AppConfig,
    types::{EnvStatus, StatusResponse},
};

/// UTC timestamp with millisecond precision, e.g. `2024-01-02T03:04:05.123Z`.
const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

fn format_timestamp(at: OffsetDateTime) -> String {
    at.to_offset(time::UtcOffset::UTC)
        .format(TIMESTAMP_FORMAT)
        .unwrap_or_default()
}

/// Health check endpoint.
#[utoipa::path(
    get,
    path = "/health",
    tag = "status",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Report liveness and whether the database connection string is configured.
#[utoipa::path(
    get,
    path = "/test",
    tag = "status",
    responses(
        (status = 200, description = "Server is up", body = StatusResponse)
    )
)]
pub async fn server_status(Extension(config): Extension<Arc<AppConfig>>) -> Json<StatusResponse> {
    let has_postgres_url = config.has_postgres_url();
    let timestamp = format_timestamp(OffsetDateTime::now_utc());

    Json(StatusResponse {
        message: "Server is working!".to_string(),
        timestamp,
        env: EnvStatus {
            has_postgres_url,
            postgres_url_value: if has_postgres_url {
                "Set (hidden)"
            } else {
                "Not set"
            }
            .to_string(),
        },
    })
}
