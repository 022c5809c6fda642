/**
 * Authentication Middleware
 *
 * This module protects routes that require authentication. It extracts the
 * bearer token from the Authorization header, verifies it, and attaches the
 * decoded identity to the request extensions for handlers to consume.
 *
 * # Per-Request Flow
 *
 * Each request makes exactly one pass through extract → verify → dispatch:
 *
 * - No extractable token: respond 403 `{"message":"No token provided"}`
 *   without invoking the handler
 * - Token present but invalid or expired: respond 401
 *   `{"message":"Invalid or expired token"}` without invoking the handler
 * - Token verified: attach `AuthenticatedUser` to the request extensions
 *   and invoke the handler
 *
 * There are no retries; a failure is terminal for the request. The two
 * verification failure kinds are distinguishable in logs but share one
 * client-facing message.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

use crate::auth::sessions::TokenService;
use crate::error::AuthError;
use crate::server::state::AppState;

/// Authenticated user data extracted from the session token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i64,
    pub username: Option<String>,
}

/// Terminal middleware outcomes. Each converts to a fixed status code and a
/// fixed JSON body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// No credential could be extracted from the request
    Missing,
    /// A credential was extracted but failed verification
    Rejected,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Missing => (StatusCode::FORBIDDEN, "No token provided"),
            Self::Rejected => (StatusCode::UNAUTHORIZED, "Invalid or expired token"),
        };

        (status, Json(serde_json::json!({ "message": message }))).into_response()
    }
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the `Authorization` header
///    (format: `Bearer <token>`)
/// 2. Verifies signature and expiry
/// 3. Attaches the decoded identity to the request extensions
///
/// Responds 403 if no token is provided and 401 if the token does not
/// verify; the handler is never invoked in either case.
pub async fn require_auth(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthRejection> {
    // The credential is the second word of the header value.
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.split_whitespace().nth(1))
        .ok_or_else(|| {
            tracing::warn!("No token provided");
            AuthRejection::Missing
        })?;

    let claims = tokens.verify(token).map_err(|e| {
        match e {
            AuthError::TokenExpired => tracing::warn!("Rejected expired token"),
            _ => tracing::warn!("Rejected invalid token"),
        }
        AuthRejection::Rejected
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id,
        username: claims.username,
    });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Use as a handler parameter on routes behind `require_auth` to get the
/// identity the middleware attached.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = StatusCode;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                StatusCode::UNAUTHORIZED
            })?;

        Ok(AuthUser(user))
    }
}
