/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /user/signup.
 *
 * # Registration Process
 *
 * 1. Validate required fields and that the two passwords match
 * 2. Check if the username or email is already taken
 * 3. Hash the password
 * 4. Create the user in the database
 * 5. Issue a session token for auto-login
 *
 * # Security
 *
 * - Passwords are hashed with a fixed bcrypt work factor before storage
 * - Plaintext passwords are never logged or returned in responses
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::handlers::types::{SignupRequest, SignupResponse, UserSummary};
use crate::auth::password;
use crate::auth::users::{create_user, username_or_email_exists, NewUser};
use crate::error::ApiError;
use crate::server::state::AppState;

/// Sign up handler
///
/// Validates the input, creates a new user account, and returns a session
/// token for immediate authentication.
///
/// # Errors
///
/// * `400 Bad Request` - missing required fields, or passwords do not match
/// * `409 Conflict` - username or email already exists
/// * `503 Service Unavailable` - database not configured
/// * `500 Internal Server Error` - hashing, insertion, or token issuance failed
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let (username, email, password, password_verify, first_name, last_name) = match (
        request.username,
        request.email,
        request.password,
        request.password_verify,
        request.first_name,
        request.last_name,
    ) {
        (Some(u), Some(e), Some(p), Some(pv), Some(f), Some(l)) => (u, e, p, pv, f, l),
        _ => {
            return Err(ApiError::bad_request(
                "Username, email, password, password verification, first name, and last name are required",
            ));
        }
    };

    tracing::info!("Signup request for username: {}, email: {}", username, email);

    if password != password_verify {
        tracing::warn!("Signup passwords do not match for username: {}", username);
        return Err(ApiError::bad_request("Passwords do not match"));
    }

    let pool = state.db_pool.as_ref().ok_or_else(|| {
        tracing::error!("Database not configured");
        ApiError::service_unavailable()
    })?;

    if username_or_email_exists(pool, &username, &email).await? {
        tracing::warn!("Username or email already exists: {}", username);
        return Err(ApiError::conflict("Username or email already exists"));
    }

    let password_hash = password::hash(&password)?;

    let user = create_user(
        pool,
        NewUser {
            username,
            email,
            password_hash,
            first_name,
            last_name,
            phone: request.phone,
            date_of_birth: request.date_of_birth,
            profile_image: request.profile_image,
            bio: request.bio,
        },
    )
    .await?;

    // Auto-login: the client gets a session token with the signup response.
    let token = state.tokens.issue(user.id, Some(user.username.clone()))?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            message: "User registered successfully".to_string(),
            token,
            user: UserSummary {
                id: user.id,
                username: user.username,
                email: user.email,
                first_name: user.first_name,
                last_name: user.last_name,
            },
        }),
    ))
}
