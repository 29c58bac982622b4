use crate::app_state::AppState;
use crate::health;
use crate::{
    create_category, create_recipe, delete_category, delete_recipe, get_recipe, list_recipes,
    login, register, update_category, update_recipe,
};

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Auth endpoints (public)
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        // Recipe endpoints (bearer token required)
        .route("/recipes", post(create_recipe).get(list_recipes))
        .route(
            "/recipes/{id}",
            get(get_recipe).put(update_recipe).delete(delete_recipe),
        )
        // Category endpoints (ownership resolved through the parent recipe)
        .route("/recipes/{id}/categories", post(create_category))
        .route(
            "/recipes/{id}/categories/{category_id}",
            put(update_category).delete(delete_category),
        )
        // Add shared state
        .with_state(state)
        // CORS middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
