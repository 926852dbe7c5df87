/// Authentication endpoints
///
/// This module provides the account endpoints:
/// - Registration
/// - Login
///
/// # Endpoints
///
/// - `POST /api/register` - Create an account
/// - `POST /api/login` - Authenticate with email and password
///
/// No token or session is issued on login; the success payload carries the
/// account's email and nothing else.

use crate::{app::AppState, error::ApiResult};
use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Register request
///
/// Fields default to empty strings when absent, so a missing field and an
/// empty field are handled identically by the service's presence check.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Email address
    #[serde(default)]
    pub email: String,

    /// Password (hashed before it reaches the store)
    #[serde(default)]
    pub password: String,
}

/// Register response
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    /// Confirmation message
    pub message: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Email address
    #[serde(default)]
    pub email: String,

    /// Password
    #[serde(default)]
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Confirmation message
    pub message: String,

    /// The authenticated account's email
    pub email: String,
}

/// Register a new account
///
/// # Endpoint
///
/// ```text
/// POST /api/register
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret123"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Missing field or email already registered
/// - `500 Internal Server Error`: Store or hashing failure
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    state.auth.register(&req.email, &req.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Login endpoint
///
/// # Endpoint
///
/// ```text
/// POST /api/login
/// Content-Type: application/json
///
/// {
///   "email": "user@example.com",
///   "password": "secret123"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Login successful",
///   "email": "user@example.com"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Invalid credentials (unknown email or wrong password,
///   indistinguishable by design)
/// - `500 Internal Server Error`: Store or hashing failure
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let email = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        email,
    }))
}
