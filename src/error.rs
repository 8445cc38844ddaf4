/// Unified error types for the movie catalog
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use crate::api::ApiResponse;

/// Message returned when a request body is not valid JSON
pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON format";

/// Message returned when required movie fields are missing or empty
pub const REQUIRED_FIELDS_MESSAGE: &str = "Required fields: isbn, title and director are required";

/// Main error type for the catalog
#[derive(Error, Debug)]
pub enum ApiError {
    /// Malformed body or missing required fields
    #[error("{0}")]
    InvalidInput(String),

    /// No record matches the requested id
    #[error("{0}")]
    NotFound(String),

    /// Startup configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal server errors
    #[error("Internal error: {0}")]
    Internal(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ApiError {
    /// Not-found error for a movie id
    pub fn movie_not_found() -> Self {
        ApiError::NotFound("Movie not found".to_string())
    }

    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Config(_) | ApiError::Internal(_) | ApiError::Io(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        tracing::debug!(%errors, "movie validation failed");
        ApiError::InvalidInput(REQUIRED_FIELDS_MESSAGE.to_string())
    }
}

/// Convert ApiError to HTTP response
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::InvalidInput(msg) | ApiError::NotFound(msg) => msg.clone(),
            _ => {
                tracing::error!(error = %self, "request failed");
                "Internal server error".to_string() // Don't leak details
            }
        };

        (status, Json(ApiResponse::<()>::failure(message))).into_response()
    }
}

/// Result type alias for catalog operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::InvalidInput("x".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::movie_not_found().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Internal("boom".to_string()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_error_does_not_leak_details() {
        let response = ApiError::Internal("secret path /etc/x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Internal server error");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn test_not_found_renders_envelope() {
        let response = ApiError::movie_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Movie not found");
    }
}
