//! Error Module
//!
//! This module defines the error types used across the backend.
//!
//! # Architecture
//!
//! The error module is organized into focused submodules:
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - Error conversion implementations (IntoResponse)
//!
//! # Error Types
//!
//! - `AuthError` - Precise internal error kinds for the credential and token
//!   components (hashing failure, signing failure, expired token, invalid token)
//! - `ApiError` - Handler-facing errors carrying an HTTP status and message
//! - `ConfigError` - Startup configuration failures
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse` from Axum, allowing handlers to return
//! it directly with `?`. Internal error causes (hashing, signing, database) are
//! never exposed to clients; verification-time token failures all collapse to
//! one external message so callers cannot tell which check failed.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

pub use types::{ApiError, AuthError, ConfigError};
