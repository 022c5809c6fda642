/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables.
 *
 * # Configuration Sources
 *
 * - `JWT_SECRET` - required, non-empty; misconfiguration fails startup
 *   rather than surfacing per-request
 * - `DATABASE_URL` - optional; without it the server runs with database
 *   features disabled and the affected endpoints answer 503
 * - `SERVER_PORT` - optional, defaults to 3030
 */

use sqlx::PgPool;

use crate::error::ConfigError;

const DEFAULT_PORT: u16 = 3030;

/// Configuration loaded once at process start
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: Option<String>,
    /// Token signing secret. Read-only for the life of the process;
    /// rotating it requires a restart and invalidates all issued tokens.
    pub jwt_secret: String,
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingJwtSecret` when `JWT_SECRET` is unset
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or(ConfigError::MissingJwtSecret)?;

        let database_url = std::env::var("DATABASE_URL").ok();

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Connects to PostgreSQL at `database_url`
/// 2. Runs the embedded migrations
///
/// # Returns
///
/// - `Some(PgPool)` if the database is successfully configured
/// - `None` if no URL was provided or the connection fails
///
/// Connection errors are logged but do not prevent server startup; the
/// server runs without database features.
pub async fn load_database(database_url: Option<&str>) -> Option<PgPool> {
    let database_url = match database_url {
        Some(url) => url,
        None => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let pool = match PgPool::connect(database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to create database connection pool: {:?}", e);
            tracing::warn!("Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(_) => {
            tracing::info!("Database migrations completed successfully");
        }
        Err(e) => {
            // Migrations might have already been run out of band.
            tracing::error!("Failed to run database migrations: {:?}", e);
            tracing::warn!("Continuing without migrations - database might not be up to date");
        }
    }

    Some(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_missing_secret_fails_startup() {
        std::env::remove_var("JWT_SECRET");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingJwtSecret)
        ));
    }

    #[test]
    #[serial]
    fn test_empty_secret_fails_startup() {
        std::env::set_var("JWT_SECRET", "");
        assert!(matches!(
            AppConfig::from_env(),
            Err(ConfigError::MissingJwtSecret)
        ));
        std::env::remove_var("JWT_SECRET");
    }

    #[test]
    #[serial]
    fn test_defaults() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::remove_var("DATABASE_URL");
        std::env::remove_var("SERVER_PORT");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 3030);
        assert!(config.database_url.is_none());
        assert_eq!(config.jwt_secret, "test-secret");

        std::env::remove_var("JWT_SECRET");
    }

    #[test]
    #[serial]
    fn test_port_override() {
        std::env::set_var("JWT_SECRET", "test-secret");
        std::env::set_var("SERVER_PORT", "8088");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.port, 8088);

        std::env::remove_var("SERVER_PORT");
        std::env::remove_var("JWT_SECRET");
    }
}
