//! Integration tests for registration and login

mod common;

use crate::common::{body_json, create_test_app_state, register_user, send, send_json};

use rb_server::build_router;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_register_returns_token() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    let response = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "username": "admin", "password": "admin" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await;
    let token = body["token"].as_str().unwrap();

    // The issued token verifies against the same secret
    let claims = state.tokens.verify(token).unwrap();
    assert_eq!(claims.user_id().unwrap(), 1);
}

#[tokio::test]
async fn test_register_duplicate_username_is_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    register_user(&app, "admin", "admin").await;

    let response = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "username": "admin", "password": "other" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_register_blank_username_is_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "username": "   ", "password": "secret" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "username");
}

#[tokio::test]
async fn test_register_empty_password_is_rejected() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = send_json(
        &app,
        "POST",
        "/auth/register",
        None,
        json!({ "username": "admin", "password": "" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_returns_token_and_id() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    register_user(&app, "admin", "admin").await;

    let response = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        json!({ "username": "admin", "password": "admin" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert!(body["token"].as_str().is_some());
    assert_eq!(body["id"], 1);
}

#[tokio::test]
async fn test_login_wrong_password_and_unknown_user_are_indistinguishable() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    register_user(&app, "admin", "admin").await;

    let wrong_password = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        json!({ "username": "admin", "password": "nope" }),
    )
    .await;
    let unknown_user = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        json!({ "username": "ghost", "password": "nope" }),
    )
    .await;

    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status(), StatusCode::UNAUTHORIZED);

    let wrong_body = body_json(wrong_password).await;
    let unknown_body = body_json(unknown_user).await;
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn test_protected_route_without_token_is_unauthorized() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = send(&app, "GET", "/recipes", None).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_protected_route_with_garbage_token_is_unauthorized() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = send(&app, "GET", "/recipes", Some("not-a-jwt")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_non_bearer_scheme_is_unauthorized() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let token = register_user(&app, "admin", "admin").await;

    // Right token, wrong scheme
    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/recipes")
        .header("Authorization", format!("Basic {}", token))
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let state = create_test_app_state().await;
    let app = build_router(state.clone());

    register_user(&app, "admin", "admin").await;

    // Same secret, negative ttl: already expired when issued
    let expired = common::test_token_service(-60).issue(1).unwrap();

    let response = send(&app, "GET", "/recipes", Some(&expired)).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_legacy_access_token_header_is_accepted() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let token = register_user(&app, "admin", "admin").await;

    let request = axum::http::Request::builder()
        .method("GET")
        .uri("/recipes")
        .header("x-access-token", &token)
        .body(axum::body::Body::empty())
        .unwrap();

    let response = tower::ServiceExt::oneshot(app.clone(), request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_health_check_is_public() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let response = send(&app, "GET", "/health", None).await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
}
