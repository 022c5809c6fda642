/**
 * Password Hashing
 *
 * This module wraps bcrypt for credential hashing and verification.
 *
 * # Digest Format
 *
 * The digest string encodes the algorithm identifier, cost, salt, and hash,
 * so verification is self-contained. The encoding is owned entirely by this
 * module; no other component may parse its internals.
 *
 * # Security
 *
 * - Each `hash` call generates a fresh random salt, so hashing the same
 *   plaintext twice yields two different digests
 * - Verification is a constant-time comparison (via bcrypt)
 * - Plaintext passwords are never logged
 */

use crate::error::AuthError;

/// Fixed bcrypt work factor. Deliberately expensive to make brute-force
/// search costly.
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password into a self-describing digest
///
/// # Errors
///
/// Returns `AuthError::Hashing` if the underlying algorithm or random
/// source fails. Fatal for the request in progress.
pub fn hash(plaintext: &str) -> Result<String, AuthError> {
    let digest = bcrypt::hash(plaintext, HASH_COST)?;
    Ok(digest)
}

/// Verify a plaintext password against a stored digest
///
/// Recomputes the hash using the salt and cost embedded in `digest` and
/// compares in constant time.
///
/// # Errors
///
/// A well-formed digest that does not match returns `Ok(false)`. A
/// structurally malformed digest returns `AuthError::Hashing`.
pub fn verify(plaintext: &str, digest: &str) -> Result<bool, AuthError> {
    let matched = bcrypt::verify(plaintext, digest)?;
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let digest = hash("correct horse battery staple").unwrap();
        assert!(verify("correct horse battery staple", &digest).unwrap());
    }

    #[test]
    fn test_wrong_password_does_not_verify() {
        let digest = hash("password123").unwrap();
        assert!(!verify("password124", &digest).unwrap());
        assert!(!verify("", &digest).unwrap());
    }

    #[test]
    fn test_fresh_salt_per_call() {
        let first = hash("password123").unwrap();
        let second = hash("password123").unwrap();
        // Different salts produce different digests, yet both verify.
        assert_ne!(first, second);
        assert!(verify("password123", &first).unwrap());
        assert!(verify("password123", &second).unwrap());
    }

    #[test]
    fn test_digest_encodes_cost() {
        let digest = hash("password123").unwrap();
        assert!(digest.contains("$10$"));
    }

    #[test]
    fn test_malformed_digest_is_an_error() {
        let result = verify("password123", "not-a-bcrypt-digest");
        assert!(matches!(result, Err(AuthError::Hashing(_))));
    }
}
