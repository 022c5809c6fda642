//! Trip API integration tests
//!
//! Exercises the protected trip routes through the full router, covering
//! the middleware outcomes end to end: missing token, rejected token, and
//! verified token reaching the handler. Runs without a database.

mod common;

use axum::http::{header::AUTHORIZATION, StatusCode};
use common::{bearer, server_without_db, state_without_db};
use triplog::routes::create_router;

#[tokio::test]
async fn test_trips_without_token_answers_403() {
    let server = server_without_db();

    let response = server.get("/user/trips").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "message": "No token provided" })
    );
}

#[tokio::test]
async fn test_total_distance_without_token_answers_403() {
    let server = server_without_db();

    let response = server.get("/user/trips/total-distance").await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_trips_with_garbage_token_answers_401() {
    let server = server_without_db();

    let response = server
        .get("/user/trips")
        .add_header(AUTHORIZATION, bearer("garbage"))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "message": "Invalid or expired token" })
    );
}

#[tokio::test]
async fn test_trips_with_valid_token_reaches_handler() {
    let state = state_without_db();
    let token = state.tokens.issue(42, None).unwrap();
    let server = axum_test::TestServer::new(create_router(state)).unwrap();

    // The middleware passes; the handler then finds no database.
    let response = server
        .get("/user/trips")
        .add_header(AUTHORIZATION, bearer(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_add_trip_missing_fields_answers_400() {
    let state = state_without_db();
    let token = state.tokens.issue(42, None).unwrap();
    let server = axum_test::TestServer::new(create_router(state)).unwrap();

    let response = server
        .post("/user/trips/add")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({ "fleet_id": 7 }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"],
        "Required fields: fleet_id, start_time, end_time, distance_travelled, duration_minutes, and status"
    );
}

#[tokio::test]
async fn test_add_trip_unknown_status_answers_400() {
    let state = state_without_db();
    let token = state.tokens.issue(42, None).unwrap();
    let server = axum_test::TestServer::new(create_router(state)).unwrap();

    let response = server
        .post("/user/trips/add")
        .add_header(AUTHORIZATION, bearer(&token))
        .json(&serde_json::json!({
            "fleet_id": 7,
            "start_time": "2026-08-01T08:00:00Z",
            "end_time": "2026-08-01T09:30:00Z",
            "distance_travelled": 42.5,
            "duration_minutes": 90,
            "status": "finished"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body["message"],
        "Status must be one of: in_progress, completed, cancelled"
    );
}

#[tokio::test]
async fn test_top_travelers_is_public() {
    let server = server_without_db();

    // No token required; only the missing database stops it.
    let response = server.get("/user/top-travelers").await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_cors_preflight() {
    let server = server_without_db();

    let response = server
        .method(axum::http::Method::OPTIONS, "/user/login")
        .add_header(
            axum::http::header::ORIGIN,
            axum::http::HeaderValue::from_static("https://app.example.com"),
        )
        .add_header(
            axum::http::header::ACCESS_CONTROL_REQUEST_METHOD,
            axum::http::HeaderValue::from_static("POST"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
