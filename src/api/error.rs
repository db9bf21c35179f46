//! API error types with structured JSON responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::queue::QueueError;

/// Structured error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: &'static str,
    pub message: String,
}

/// API-level errors with HTTP status mapping.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    BadRequest(String),
    #[error("Unknown specialization: {0}")]
    UnknownSpecialization(String),
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Appointment store unavailable: {0}")]
    StoreUnavailable(String),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::BadRequest(detail) => (
                StatusCode::BAD_REQUEST,
                "BAD_REQUEST",
                detail.clone(),
            ),
            ApiError::UnknownSpecialization(name) => (
                StatusCode::BAD_REQUEST,
                "UNKNOWN_SPECIALIZATION",
                format!("Unknown specialization: {name}"),
            ),
            ApiError::InvalidRecord(detail) => {
                tracing::error!(detail = %detail, "Store returned an invalid appointment record");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INVALID_RECORD",
                    detail.clone(),
                )
            }
            ApiError::StoreUnavailable(detail) => {
                tracing::error!(detail = %detail, "Appointment store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "STORE_UNAVAILABLE",
                    "Appointment store unavailable".to_string(),
                )
            }
            ApiError::Internal(detail) => {
                tracing::error!(detail = %detail, "API internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = ErrorBody {
            error: ErrorDetail { code, message },
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::InvalidFilter(detail) => ApiError::BadRequest(detail),
            QueueError::UnknownSpecialization(name) => ApiError::UnknownSpecialization(name),
            e @ QueueError::InvalidRecord { .. } => ApiError::InvalidRecord(e.to_string()),
            QueueError::StoreUnavailable(e) => ApiError::StoreUnavailable(e.to_string()),
        }
    }
}
