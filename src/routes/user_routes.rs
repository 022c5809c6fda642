/**
 * User Routes
 *
 * Routes mounted under `/user`:
 *
 * - `POST /user/signup` - user registration (public)
 * - `POST /user/login` - user login (public)
 * - `GET  /user/me` - current user info (bearer token checked in handler)
 * - `GET  /user/top-travelers` - public leaderboard
 *
 * Trip routes are nested below at `/user/trips`; see `trip_routes`.
 */

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::{get_me, login, signup};
use crate::routes::trip_routes::trip_routes;
use crate::server::state::AppState;
use crate::trips::get_top_travelers;

/// Build the `/user` route tree
pub fn user_routes(app_state: AppState) -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/me", get(get_me))
        .route("/top-travelers", get(get_top_travelers))
        .nest("/trips", trip_routes(app_state))
}
