//! Unified error types for the Gearbox API
//!
//! Two layers:
//! - `DomainError`: core catalog errors raised by the service and store
//! - `AppError`: application layer errors (wraps domain errors for HTTP
//!   responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Domain layer errors - pure catalog logic errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed input, rejected before any write begins
    #[error("Validation error: {0}")]
    Validation(String),

    /// Read-path store failure
    #[error("Database error: {0}")]
    Database(String),

    /// The store rejected a write mid-transaction, or the transaction
    /// lifecycle itself failed; surfaced only after rollback
    #[error("Transaction failed: {0}")]
    Transaction(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Domain(DomainError::Validation(msg)) => (
                StatusCode::BAD_REQUEST,
                "Validation error",
                Some(msg.clone()),
            ),
            AppError::Domain(DomainError::Database(msg)) => {
                tracing::error!("Database error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::Domain(DomainError::Transaction(msg)) => {
                tracing::error!("Transaction error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "Not found", Some(msg.clone())),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
