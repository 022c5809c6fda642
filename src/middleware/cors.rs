/**
 * CORS Middleware
 *
 * Cross-origin policy for the API: any origin, the standard method set, and
 * the Content-Type and Authorization headers. Preflight OPTIONS requests are
 * answered by the layer itself.
 */

use axum::http::{header, Method};
use tower_http::cors::{Any, CorsLayer};

/// Build the CORS layer applied to the whole router
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
