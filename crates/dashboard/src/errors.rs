use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use seed_data::SeedError;
use thiserror::Error;
use tracing::error;

use crate::types::ErrorResponse;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Seed(#[from] SeedError),
}

impl AppError {
    /// Message reported as `details`, falling back to "Unknown error".
    pub fn details(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Seed(e) => error!("Seeding error: {e}"),
        }

        let body = Json(ErrorResponse {
            error: "Failed to seed database".to_string(),
            details: self.details(),
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
