#![allow(dead_code)]

//! Test infrastructure for rb-server API tests

use rb_auth::TokenService;
use rb_server::AppState;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::ServiceExt;

const TEST_JWT_SECRET: &[u8] = b"test-secret-0123456789abcdef0123";
const TEST_TOKEN_TTL_SECS: i64 = 3600;

/// Create a test pool with in-memory SQLite.
///
/// A single connection keeps every statement on the same in-memory
/// database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .expect("Failed to create test database");

    sqlx::migrate!("../crates/rb-db/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Create AppState for testing
pub async fn create_test_app_state() -> AppState {
    let pool = create_test_pool().await;
    let tokens = Arc::new(TokenService::with_hs256(
        TEST_JWT_SECRET,
        TEST_TOKEN_TTL_SECS,
    ));

    AppState { pool, tokens }
}

/// Token service sharing the test secret, for crafting tokens directly
pub fn test_token_service(ttl_secs: i64) -> TokenService {
    TokenService::with_hs256(TEST_JWT_SECRET, ttl_secs)
}

/// Register a user through the API and return their bearer token
pub async fn register_user(app: &Router, username: &str, password: &str) -> String {
    let response = send_json(
        app,
        "POST",
        "/auth/register",
        None,
        serde_json::json!({ "username": username, "password": password }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["token"]
        .as_str()
        .expect("registration response missing token")
        .to_string()
}

/// Create a recipe through the API and return its id
pub async fn create_recipe(app: &Router, token: &str, name: &str) -> i64 {
    let response = send_json(
        app,
        "POST",
        "/recipes",
        Some(token),
        serde_json::json!({ "name": name }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    json["recipe"]["id"].as_i64().expect("recipe id missing")
}

/// Send a JSON request with an optional bearer token
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = builder.body(Body::from(body.to_string())).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Send a bodyless request with an optional bearer token
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
) -> Response<axum::body::Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = builder.body(Body::empty()).unwrap();

    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON
pub async fn body_json(response: Response<axum::body::Body>) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).expect("response body is not valid JSON")
}
