// src/error.rs
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorResponse;
use crate::services::generator::GenerationError;

pub const UNREACHABLE_DETAIL: &str = "Failed to reach Gemini API";
pub const UPSTREAM_DETAIL: &str = "Error communicating with Gemini API";
pub const GENERIC_DETAIL: &str = "Failed to generate itinerary";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation error: {0}")]
    Validation(String),

    /// Body failed to deserialize; keeps the extractor's status (400/415/422).
    #[error("rejected request body: {detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Rejected { status, .. } => *status,
            AppError::Generation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to the caller. Upstream failures never leak their detail.
    pub fn detail(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Rejected { detail, .. } => detail.clone(),
            AppError::Generation(GenerationError::Transport(_)) => UNREACHABLE_DETAIL.to_string(),
            AppError::Generation(GenerationError::Upstream { .. }) => UPSTREAM_DETAIL.to_string(),
            AppError::Generation(GenerationError::Decode(_)) => GENERIC_DETAIL.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Generation(err) => {
                tracing::error!(error = %err, "Itinerary generation failed");
            }
            other => {
                tracing::warn!(error = %other, "Rejected itinerary request");
            }
        }

        let body = ErrorResponse {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}
