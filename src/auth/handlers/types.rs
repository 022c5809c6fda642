/**
 * Authentication Handler Types
 *
 * This module defines the request and response types used by the
 * authentication handlers. These types are shared across signup, login,
 * and get_me.
 *
 * Request fields are optional at the serde level so the handlers can answer
 * missing fields with a 400 and the exact required-field message, rather
 * than a generic deserialization rejection.
 */

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sign up request
#[derive(Deserialize, Serialize, Debug)]
pub struct SignupRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    /// Plaintext password (hashed before storage, never logged)
    pub password: Option<String>,
    /// Must match `password`
    pub password_verify: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub username: Option<String>,
    /// Plaintext password (verified against the stored digest, never logged)
    pub password: Option<String>,
}

/// User information that is safe to return to clients. Never includes the
/// password digest.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserSummary {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// Response for a successful signup (auto-login token included)
#[derive(Serialize, Debug)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    /// Session token for immediate authentication
    pub token: String,
    pub user: UserSummary,
}

/// Response for a successful login
#[derive(Serialize, Debug)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub token: String,
}

/// Response for GET /user/me
#[derive(Serialize, Debug)]
pub struct MeResponse {
    pub success: bool,
    pub user: UserSummary,
}
