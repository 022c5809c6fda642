/**
 * Login Handler
 *
 * This module implements the user authentication handler for POST /user/login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by username
 * 2. Verify the password against the stored digest
 * 3. Issue a session token
 *
 * # Security
 *
 * - Unknown username and wrong password produce the same 401 response, so
 *   the endpoint does not reveal which check failed
 * - Password verification is constant-time (via bcrypt)
 * - Plaintext passwords are never logged
 */

use axum::{extract::State, response::Json};

use crate::auth::handlers::types::{LoginRequest, LoginResponse};
use crate::auth::password;
use crate::auth::users::get_user_by_username;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - username or password missing
/// * `401 Unauthorized` - unknown user or wrong password
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - database or token issuance failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let (username, provided_password) = match (request.username, request.password) {
        (Some(u), Some(p)) => (u, p),
        _ => return Err(ApiError::bad_request("Username and password are required")),
    };

    tracing::info!("Login request for: {}", username);

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    let user = get_user_by_username(pool, &username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", username);
            ApiError::unauthorized("Invalid username or password")
        })?;

    let valid = password::verify(&provided_password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", username);
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let token = state.tokens.issue(user.id, Some(user.username.clone()))?;

    tracing::info!("User logged in successfully: {}", user.username);

    Ok(Json(LoginResponse {
        success: true,
        message: "Login successful!".to_string(),
        token,
    }))
}
