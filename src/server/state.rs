/**
 * Application State
 *
 * This module defines the application state structure and the `FromRef`
 * implementations for Axum sub-state extraction.
 *
 * # Thread Safety
 *
 * Both fields are read-only after process start: the token service holds
 * the derived signing keys, and the pool manages its own connections.
 * Cloning the state is cheap and every request sees the same values; no
 * locks are needed.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenService;

/// Central state container shared by all handlers and middleware
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, `None` when the database is not configured
    pub db_pool: Option<PgPool>,
    /// Session token issuer/verifier
    pub tokens: TokenService,
}

impl FromRef<AppState> for TokenService {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(state: &AppState) -> Self {
        state.db_pool.clone()
    }
}
