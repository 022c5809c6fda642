/**
 * User Model and Database Operations
 *
 * This module handles user data and database operations.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: i64,
    /// Username (unique)
    pub username: String,
    /// User email address
    pub email: String,
    /// Hashed password digest (opaque; owned by the password module)
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user. The password arrives here already
/// hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `new_user` - User fields with the password already hashed
///
/// # Returns
/// Created user or error
pub async fn create_user(pool: &PgPool, new_user: NewUser) -> Result<User, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (
            username, email, password_hash, first_name, last_name,
            phone, date_of_birth, profile_image, bio
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING id, username, email, password_hash, first_name, last_name,
                  phone, date_of_birth, profile_image, bio, created_at
        "#,
    )
    .bind(&new_user.username)
    .bind(&new_user.email)
    .bind(&new_user.password_hash)
    .bind(&new_user.first_name)
    .bind(&new_user.last_name)
    .bind(&new_user.phone)
    .bind(new_user.date_of_birth)
    .bind(&new_user.profile_image)
    .bind(&new_user.bio)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by username
pub async fn get_user_by_username(
    pool: &PgPool,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, first_name, last_name,
               phone, date_of_birth, profile_image, bio, created_at
        FROM users
        WHERE username = $1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Get user by ID
pub async fn get_user_by_id(pool: &PgPool, id: i64) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, email, password_hash, first_name, last_name,
               phone, date_of_birth, profile_image, bio, created_at
        FROM users
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Check whether a username or email is already taken
///
/// Used by signup to answer 409 before inserting.
pub async fn username_or_email_exists(
    pool: &PgPool,
    username: &str,
    email: &str,
) -> Result<bool, sqlx::Error> {
    let existing: Option<i64> = sqlx::query_scalar(
        r#"
        SELECT id FROM users WHERE username = $1 OR email = $2
        "#,
    )
    .bind(username)
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(existing.is_some())
}
