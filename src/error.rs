//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! propagate it with `?` and Axum turns it into a JSON response of the form
//! `{"error": "<message>"}` via [`IntoResponse`].
//!
//! # Status Mapping
//!
//! | Variant        | Status |
//! |----------------|--------|
//! | `Validation`   | 400    |
//! | `NotFound`     | 404    |
//! | `Conflict`     | 409    |
//! | `Collision`    | 500    |
//! | `Internal`     | 500    |
//!
//! Server-side failures are logged with their cause and answered with a
//! generic message so storage details never reach clients.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Message returned to clients for any 5xx error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Flat JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed client input.
    #[error("{0}")]
    Validation(String),

    /// No mapping exists for the requested short id.
    #[error("{0}")]
    NotFound(String),

    /// A mapping with the same short id already exists in the store.
    #[error("{0}")]
    Conflict(String),

    /// Every generated short id collided with an existing one.
    #[error("could not assign a unique short id after {attempts} attempts")]
    Collision { attempts: usize },

    /// Storage or other unexpected failure.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Collision { .. } | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict(format!(
                    "Unique constraint violation ({})",
                    db.constraint().unwrap_or("unknown")
                ));
            }
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal(format!("Storage I/O error: {e}"))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::internal(format!("Corrupt storage data: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .find_map(|err| err.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_maps_to_400_with_message() {
        let response = AppError::bad_request("URL is required").into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "URL is required");
    }

    #[tokio::test]
    async fn test_not_found_maps_to_404() {
        let response = AppError::not_found("Short URL not found").into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Short URL not found");
    }

    #[tokio::test]
    async fn test_internal_hides_details() {
        let response = AppError::internal("Database error: connection refused").into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_collision_is_server_error() {
        let err = AppError::Collision { attempts: 5 };
        assert!(err.to_string().contains("5 attempts"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_io_error_is_internal() {
        let err: AppError = std::io::Error::other("disk full").into();
        assert!(matches!(err, AppError::Internal(_)));
    }

    #[test]
    fn test_json_error_is_internal() {
        let err: AppError = serde_json::from_str::<serde_json::Value>("{not json")
            .unwrap_err()
            .into();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
