/// Error handling for the API server
///
/// This module provides a unified error type that maps to HTTP responses.
/// Handlers return `Result<T, ApiError>` which automatically converts to the
/// appropriate status code with a `{"error": <message>}` JSON body.
///
/// # Example
///
/// ```
/// use sahub_api::error::{ApiError, ApiResult};
/// use axum::Json;
/// use serde_json::json;
///
/// async fn handler() -> ApiResult<Json<serde_json::Value>> {
///     Err(ApiError::BadRequest("Invalid credentials".to_string()))
/// }
/// ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sahub_shared::auth::service::AuthError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// Bad request (400) - missing fields, duplicate email, bad credentials
    BadRequest(String),

    /// Internal server error (500)
    InternalError(String),
}

/// Error response format: `{"error": <message>}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse { error: message });

        (status, body).into_response()
    }
}

/// Convert auth service errors to API errors
///
/// The client-facing variants keep their exact messages; store and hashing
/// failures collapse into the generic internal error.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingField | AuthError::AlreadyExists | AuthError::InvalidCredentials => {
                ApiError::BadRequest(err.to_string())
            }
            AuthError::Store(e) => ApiError::InternalError(format!("credential store: {}", e)),
            AuthError::Password(e) => ApiError::InternalError(format!("password: {}", e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::BadRequest("Invalid credentials".to_string());
        assert_eq!(err.to_string(), "Bad request: Invalid credentials");

        let err = ApiError::InternalError("pool exhausted".to_string());
        assert_eq!(err.to_string(), "Internal error: pool exhausted");
    }

    #[test]
    fn test_auth_error_mapping() {
        let err: ApiError = ApiError::from(AuthError::AlreadyExists);
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Email already exists"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        let err: ApiError = ApiError::from(AuthError::InvalidCredentials);
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Invalid credentials"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }

        let err: ApiError = ApiError::from(AuthError::MissingField);
        match err {
            ApiError::BadRequest(msg) => assert_eq!(msg, "Email and password required"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }
}
