/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines the
 * route trees with the shared middleware stack.
 *
 * # Layers
 *
 * - CORS: any origin, standard method set, Content-Type and Authorization
 *   headers; preflight OPTIONS answered by the layer
 * - Request tracing
 * - Fallback handler for unknown routes
 */

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::routes::user_routes::user_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/user", user_routes(app_state.clone()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .fallback(|| async { "404 Not Found" })
        .with_state(app_state)
}
