//! Authentication API integration tests
//!
//! Exercises the signup, login, and me endpoints through the full router.
//! These tests run without a database: request validation happens before
//! any query, and endpoints that do reach the database answer 503.

mod common;

use axum::http::{header::AUTHORIZATION, StatusCode};
use common::{bearer, server_without_db, state_without_db};
use triplog::routes::create_router;

#[tokio::test]
async fn test_signup_missing_fields_answers_400() {
    let server = server_without_db();

    let response = server
        .post("/user/signup")
        .json(&serde_json::json!({
            "username": "traveler",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Username, email, password, password verification, first name, and last name are required"
    );
}

#[tokio::test]
async fn test_signup_password_mismatch_answers_400() {
    let server = server_without_db();

    let response = server
        .post("/user/signup")
        .json(&serde_json::json!({
            "username": "traveler",
            "email": "traveler@example.com",
            "password": "password123",
            "password_verify": "password124",
            "first_name": "Ada",
            "last_name": "Lovelace"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Passwords do not match");
}

#[tokio::test]
async fn test_signup_without_database_answers_503() {
    let server = server_without_db();

    let response = server
        .post("/user/signup")
        .json(&serde_json::json!({
            "username": "traveler",
            "email": "traveler@example.com",
            "password": "password123",
            "password_verify": "password123",
            "first_name": "Ada",
            "last_name": "Lovelace"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_login_missing_fields_answers_400() {
    let server = server_without_db();

    let response = server
        .post("/user/login")
        .json(&serde_json::json!({ "username": "traveler" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Username and password are required");
}

#[tokio::test]
async fn test_login_without_database_answers_503() {
    let server = server_without_db();

    let response = server
        .post("/user/login")
        .json(&serde_json::json!({
            "username": "traveler",
            "password": "password123"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_me_without_header_answers_401() {
    let server = server_without_db();

    let response = server.get("/user/me").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Bearer token is required");
}

#[tokio::test]
async fn test_me_with_garbage_token_answers_401() {
    let server = server_without_db();

    let response = server
        .get("/user/me")
        .add_header(AUTHORIZATION, bearer("garbage"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_me_with_valid_token_reaches_database_check() {
    let state = state_without_db();
    let token = state.tokens.issue(42, Some("traveler".to_string())).unwrap();
    let server = axum_test::TestServer::new(create_router(state)).unwrap();

    // Token verification succeeds; the handler then finds no database.
    let response = server
        .get("/user/me")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_route_answers_404() {
    let server = server_without_db();

    let response = server.get("/user/unknown").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}
