//! triplog - Trip-Logging Backend
//!
//! An HTTP backend for a trip-logging application: user registration and
//! login with password hashing and token-based session auth, plus endpoints
//! for recording and querying trips.
//!
//! # Module Structure
//!
//! - **`auth`** - Password hashing, session tokens, users, auth endpoints
//! - **`trips`** - Trip model and endpoints, top-travelers leaderboard
//! - **`middleware`** - Auth middleware and CORS layer
//! - **`routes`** - Route configuration
//! - **`server`** - Configuration, state, and application construction
//! - **`error`** - Error types and HTTP conversions
//!
//! # Usage
//!
//! ```rust,no_run
//! use triplog::server::{create_app, AppConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod trips;
