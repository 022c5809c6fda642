/**
 * Session Tokens
 *
 * This module handles JWT issuance and verification for user sessions.
 *
 * # Token Lifecycle
 *
 * Tokens are stateless: there is no server-side revocation list. A token's
 * lifecycle ends by time expiry (24 hours after issuance) or by rotating the
 * signing secret, which invalidates every previously issued token.
 *
 * # Secret Handling
 *
 * The signing secret is read once at process start and handed to
 * `TokenService::new`; the service holds derived keys and is read-only
 * thereafter. An empty secret is rejected at construction.
 */

use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::AuthError;

/// Token lifetime: 24 hours from issuance.
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims structure
///
/// This is the wire contract for any consumer: `user_id` is always present,
/// `username` is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject identifier (user id)
    pub user_id: i64,
    /// Username (optional in the wire format)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Issues and verifies signed session tokens.
///
/// Constructed once at process start from the server secret and shared
/// read-only across requests.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenService {
    /// Create a token service from the server secret
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signing` if the secret is empty. Misconfiguration
    /// is meant to be caught at process start, not per-request.
    pub fn new(secret: &str) -> Result<Self, AuthError> {
        if secret.is_empty() {
            return Err(AuthError::Signing(
                "signing secret must not be empty".to_string(),
            ));
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        })
    }

    /// Issue a signed token for a user
    ///
    /// The claims carry the subject identifier and an absolute expiry 24
    /// hours from now.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Signing` if encoding fails.
    pub fn issue(&self, user_id: i64, username: Option<String>) -> Result<String, AuthError> {
        self.issue_at(user_id, username, unix_now())
    }

    /// Issue a token as of a given issuance instant. Expiry is `iat` plus
    /// the fixed token lifetime.
    fn issue_at(
        &self,
        user_id: i64,
        username: Option<String>,
        iat: u64,
    ) -> Result<String, AuthError> {
        let claims = Claims {
            user_id,
            username,
            exp: iat + TOKEN_TTL_SECS,
            iat,
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| AuthError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims
    ///
    /// The signature must match byte-for-byte under the current secret.
    /// The expiry check is strict: a token is expired once `now >= exp`.
    ///
    /// # Errors
    ///
    /// - `AuthError::TokenExpired` - the expiry has elapsed
    /// - `AuthError::TokenInvalid` - signature mismatch or malformed structure
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        // Expiry is checked explicitly below so the `now >= exp` boundary is
        // exact; jsonwebtoken's built-in check treats the boundary instant
        // as still valid.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;

        let data = decode::<Claims>(token, &self.decoding, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            }
        })?;

        if unix_now() >= data.claims.exp {
            return Err(AuthError::TokenExpired);
        }

        Ok(data.claims)
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs()
}
