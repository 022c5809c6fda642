//! Authentication Module
//!
//! This module handles user credentials, session tokens, and the
//! authentication endpoints.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - Password hashing and verification (bcrypt)
//! - **`sessions`** - Session token issuance and verification (JWT)
//! - **`users`** - User model and database operations
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Signup**: fields validated → password hashed → user created → token returned
//! 2. **Login**: credentials verified against the stored digest → token returned
//! 3. **Protected routes**: bearer token verified by the auth middleware
//!
//! # Security
//!
//! - Passwords are hashed with a fixed bcrypt work factor before storage
//! - Tokens are stateless, signed with a process-wide secret, and expire
//!   24 hours after issuance
//! - Invalid credentials and invalid tokens answer 401 without revealing
//!   which check failed

pub mod handlers;
pub mod password;
pub mod sessions;
pub mod users;

pub use handlers::types::{LoginRequest, LoginResponse, MeResponse, SignupRequest, SignupResponse, UserSummary};
pub use handlers::{get_me, login, signup};
pub use sessions::{Claims, TokenService};
