/**
 * Backend Error Types
 *
 * This module defines the error types used by the authentication components
 * and the HTTP handlers.
 *
 * # Error Categories
 *
 * ## Auth Errors
 *
 * `AuthError` carries the precise internal kind of a credential or token
 * failure. The distinction between `TokenExpired` and `TokenInvalid` exists
 * for logging and tests only; both map to the same external response.
 *
 * ## API Errors
 *
 * `ApiError` is what handlers return. It either wraps an `AuthError` or a
 * database error, or carries an explicit status code and message for
 * request-level failures (validation, conflicts, missing resources).
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Internal error kinds for password hashing and session tokens.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The hash or verify operation itself failed (bad digest structure,
    /// RNG failure). Surfaced to clients as a generic server error.
    #[error("password hashing failed: {0}")]
    Hashing(#[from] bcrypt::BcryptError),

    /// Token issuance failed, e.g. a missing or empty signing secret.
    #[error("token signing failed: {0}")]
    Signing(String),

    /// The token's expiry has elapsed.
    #[error("token expired")]
    TokenExpired,

    /// The token's signature or structure did not verify.
    #[error("invalid token")]
    TokenInvalid,
}

/// Startup configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The signing secret must be present and non-empty at process start.
    #[error("JWT_SECRET must be set to a non-empty value")]
    MissingJwtSecret,
}

/// Handler-facing error type.
///
/// Each variant converts to an HTTP response via `IntoResponse`; see the
/// `conversion` module for the response body format.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request-level error with an explicit status code and message.
    #[error("{message}")]
    Handler {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Credential or token failure from the auth components.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Database error. Never exposed to the client.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Create a handler error with an explicit status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::Handler {
            status,
            message: message.into(),
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::NOT_FOUND, message)
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::CONFLICT, message)
    }

    /// 503 Service Unavailable, used when the database is not configured
    pub fn service_unavailable() -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, "Database not configured")
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Handler` - Uses the status code from the error
    /// - `Auth` - 401 for verification-time rejections, 500 for
    ///   hashing/signing failures
    /// - `Database` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Handler { status, .. } => *status,
            Self::Auth(AuthError::TokenExpired) | Self::Auth(AuthError::TokenInvalid) => {
                StatusCode::UNAUTHORIZED
            }
            Self::Auth(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the client-facing error message
    ///
    /// Token verification failures collapse to one message regardless of
    /// which check failed. Hashing, signing, and database failures never
    /// expose their internal cause.
    pub fn message(&self) -> String {
        match self {
            Self::Handler { message, .. } => message.clone(),
            Self::Auth(AuthError::TokenExpired) | Self::Auth(AuthError::TokenInvalid) => {
                "Invalid or expired token".to_string()
            }
            Self::Auth(_) => "Internal server error".to_string(),
            Self::Database(_) => "Internal server error".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = ApiError::bad_request("Invalid request");
        match error {
            ApiError::Handler { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected Handler variant"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(
            ApiError::conflict("taken").status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(AuthError::TokenExpired).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::TokenInvalid).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::from(AuthError::Signing("no secret".into())).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_verification_failures_share_one_message() {
        let expired = ApiError::from(AuthError::TokenExpired).message();
        let invalid = ApiError::from(AuthError::TokenInvalid).message();
        assert_eq!(expired, invalid);
        assert_eq!(expired, "Invalid or expired token");
    }

    #[test]
    fn test_internal_causes_not_exposed() {
        let error = ApiError::from(AuthError::Signing("JWT_SECRET missing".into()));
        assert!(!error.message().contains("JWT_SECRET"));
    }
}
