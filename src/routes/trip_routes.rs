/**
 * Trip Routes
 *
 * Routes mounted under `/user/trips`, all gated by the auth middleware:
 *
 * - `GET  /user/trips` - all trips for the authenticated user
 * - `GET  /user/trips/total-distance` - sum of the user's trip distances
 * - `POST /user/trips/add` - record a new trip
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::trips::{add_trip, list_trips, total_distance};

/// Build the `/user/trips` route tree with the auth middleware applied
pub fn trip_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_trips))
        .route("/total-distance", get(total_distance))
        .route("/add", post(add_trip))
        .route_layer(middleware::from_fn_with_state(app_state, require_auth))
}
