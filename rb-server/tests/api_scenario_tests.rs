//! End-to-end scenarios walking the full register/login/CRUD flow

mod common;

use crate::common::{body_json, create_test_app_state, register_user, send, send_json};

use rb_server::build_router;

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_full_recipe_lifecycle() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    // Register, then log in again to get a fresh token
    register_user(&app, "admin", "admin").await;

    let login = send_json(
        &app,
        "POST",
        "/auth/login",
        None,
        json!({ "username": "admin", "password": "admin" }),
    )
    .await;
    assert_eq!(login.status(), StatusCode::OK);
    let token = body_json(login).await["token"].as_str().unwrap().to_string();

    // Create a recipe
    let created = send_json(
        &app,
        "POST",
        "/recipes",
        Some(&token),
        json!({ "name": "weeknight curry" }),
    )
    .await;
    assert_eq!(created.status(), StatusCode::CREATED);
    let recipe_id = body_json(created).await["recipe"]["id"].as_i64().unwrap();

    // Add two categories
    for name in ["spicy", "vegetarian"] {
        let response = send_json(
            &app,
            "POST",
            &format!("/recipes/{}/categories", recipe_id),
            Some(&token),
            json!({ "name": name }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Fetch it back with categories embedded
    let fetched = send(&app, "GET", &format!("/recipes/{}", recipe_id), Some(&token)).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    let body = body_json(fetched).await;
    assert_eq!(body["recipe"]["name"], "weeknight curry");

    let categories = body["recipe"]["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 2);
    let names: Vec<_> = categories
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["spicy", "vegetarian"]);

    // Rename, complete one category, then delete everything
    let renamed = send_json(
        &app,
        "PUT",
        &format!("/recipes/{}", recipe_id),
        Some(&token),
        json!({ "name": "friday curry" }),
    )
    .await;
    assert_eq!(renamed.status(), StatusCode::OK);

    let spicy_id = categories[0]["id"].as_i64().unwrap();
    let completed = send_json(
        &app,
        "PUT",
        &format!("/recipes/{}/categories/{}", recipe_id, spicy_id),
        Some(&token),
        json!({ "name": "spicy", "done": true }),
    )
    .await;
    assert_eq!(completed.status(), StatusCode::OK);

    let deleted = send(&app, "DELETE", &format!("/recipes/{}", recipe_id), Some(&token)).await;
    assert_eq!(deleted.status(), StatusCode::OK);

    let listing = send(&app, "GET", "/recipes", Some(&token)).await;
    let body = body_json(listing).await;
    assert_eq!(body["recipes"], json!([]));
}

#[tokio::test]
async fn test_tenants_cannot_see_or_touch_each_others_data() {
    let state = create_test_app_state().await;
    let app = build_router(state);

    let alice = register_user(&app, "alice", "pw-alice").await;
    let bob = register_user(&app, "bob", "pw-bob").await;

    // Each tenant builds their own recipe
    let alice_recipe = send_json(
        &app,
        "POST",
        "/recipes",
        Some(&alice),
        json!({ "name": "pasta" }),
    )
    .await;
    let alice_id = body_json(alice_recipe).await["recipe"]["id"].as_i64().unwrap();

    send_json(
        &app,
        "POST",
        "/recipes",
        Some(&bob),
        json!({ "name": "stew" }),
    )
    .await;

    // Listings never cross tenants
    let bob_listing = send(&app, "GET", "/recipes", Some(&bob)).await;
    let body = body_json(bob_listing).await;
    let recipes = body["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["name"], "stew");

    // Every mutation path on a foreign recipe is forbidden
    let read = send(&app, "GET", &format!("/recipes/{}", alice_id), Some(&bob)).await;
    assert_eq!(read.status(), StatusCode::FORBIDDEN);

    let rename = send_json(
        &app,
        "PUT",
        &format!("/recipes/{}", alice_id),
        Some(&bob),
        json!({ "name": "mine now" }),
    )
    .await;
    assert_eq!(rename.status(), StatusCode::FORBIDDEN);

    let delete = send(&app, "DELETE", &format!("/recipes/{}", alice_id), Some(&bob)).await;
    assert_eq!(delete.status(), StatusCode::FORBIDDEN);

    let attach = send_json(
        &app,
        "POST",
        &format!("/recipes/{}/categories", alice_id),
        Some(&bob),
        json!({ "name": "sabotage" }),
    )
    .await;
    assert_eq!(attach.status(), StatusCode::FORBIDDEN);

    // Alice's recipe survives untouched
    let alice_view = send(&app, "GET", &format!("/recipes/{}", alice_id), Some(&alice)).await;
    assert_eq!(alice_view.status(), StatusCode::OK);
    let body = body_json(alice_view).await;
    assert_eq!(body["recipe"]["name"], "pasta");
    assert_eq!(body["recipe"]["categories"], json!([]));
}
