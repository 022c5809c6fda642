/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /user/me, which returns
 * information about the currently authenticated user.
 *
 * # Authentication
 *
 * The endpoint reads the bearer token from the `Authorization` header
 * directly rather than sitting behind the auth middleware; a missing or
 * malformed header answers 401 with its own message.
 */

use axum::{extract::State, http::header::AUTHORIZATION, http::HeaderMap, response::Json};

use crate::auth::handlers::types::{MeResponse, UserSummary};
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Get current user handler
///
/// # Errors
///
/// * `401 Unauthorized` - missing bearer token, or token invalid/expired
/// * `404 Not Found` - the token's subject no longer exists
/// * `503 Service Unavailable` - database not configured
pub async fn get_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<MeResponse>, ApiError> {
    let token = headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| {
            tracing::warn!("Missing or malformed authorization header");
            ApiError::unauthorized("Bearer token is required")
        })?;

    let claims = state.tokens.verify(token).map_err(|e| {
        tracing::warn!("Token verification failed: {}", e);
        e
    })?;

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    let user = get_user_by_id(pool, claims.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", claims.user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(MeResponse {
        success: true,
        user: UserSummary {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        },
    }))
}
