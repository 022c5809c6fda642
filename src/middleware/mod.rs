//! Middleware Module
//!
//! This module contains the HTTP middleware for the backend server.
//!
//! - **`auth`** - Authentication middleware for protecting routes
//! - **`cors`** - Cross-origin policy layer

pub mod auth;
pub mod cors;

pub use auth::{require_auth, AuthRejection, AuthUser, AuthenticatedUser};
pub use cors::cors_layer;
