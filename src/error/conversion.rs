/**
 * Error Conversion
 *
 * This module provides the `IntoResponse` implementation for `ApiError`,
 * allowing handlers to return it directly.
 *
 * # Response Format
 *
 * Handler error responses are returned as JSON:
 * ```json
 * {
 *   "success": false,
 *   "message": "Error message"
 * }
 * ```
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.message();

        // Internal failures are logged with their precise cause; the client
        // only ever sees the collapsed message.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {}", self);
        }

        let body = serde_json::json!({
            "success": false,
            "message": message,
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::types::AuthError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_handler_error_response() {
        let response = ApiError::bad_request("Passwords do not match").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Passwords do not match");
    }

    #[tokio::test]
    async fn test_auth_error_response_is_collapsed() {
        let response = ApiError::from(AuthError::TokenExpired).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Invalid or expired token");
    }
}
