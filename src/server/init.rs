/**
 * Server Initialization
 *
 * This module builds the Axum application from loaded configuration.
 *
 * # Initialization Process
 *
 * 1. Construct the token service from the signing secret (an empty secret
 *    fails here, at process start)
 * 2. Connect to the database and run migrations, if configured
 * 3. Assemble the router with state, middleware, and routes
 */

use axum::Router;

use crate::auth::sessions::TokenService;
use crate::error::AuthError;
use crate::routes::create_router;
use crate::server::config::{load_database, AppConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Returns `AuthError::Signing` if the signing secret is rejected by the
/// token service.
pub async fn create_app(config: AppConfig) -> Result<Router, AuthError> {
    tracing::info!("Initializing triplog backend server");

    let tokens = TokenService::new(&config.jwt_secret)?;

    let db_pool = load_database(config.database_url.as_deref()).await;

    let app_state = AppState { db_pool, tokens };

    Ok(create_router(app_state))
}
