//! Registration and login handlers.
//!
//! Registration stores a one-way password hash and immediately issues
//! a token; login re-verifies the password against the stored hash.
//! Login failures are deliberately indistinguishable: an unknown
//! username and a wrong password produce the same response.

use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::app_state::AppState;
use crate::{LoginRequest, LoginResponse, RegisterRequest, TokenResponse};

use rb_auth::{hash_password, verify_password};
use rb_core::models::require_name;
use rb_db::UserRepository;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;

/// POST /auth/register - create an identity and issue a token
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> ApiErrorResult<Response> {
    require_name(&request.username, "username")?;
    if request.password.is_empty() {
        return Err(ApiError::validation(
            "password must not be empty",
            Some("password"),
        ));
    }

    let username = request.username.trim();
    let users = UserRepository::new(state.pool.clone());

    if users.find_by_username(username).await?.is_some() {
        return Err(ApiError::conflict("Username already exists"));
    }

    let password_hash = hash_password(&request.password)?;
    let user_id = users.create(username, &password_hash).await?;

    let token = state.tokens.issue(user_id)?;

    info!("Registered user '{}' (id {})", username, user_id);

    Ok((StatusCode::CREATED, Json(TokenResponse { token })).into_response())
}

/// POST /auth/login - verify credentials and issue a fresh token
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiErrorResult<Response> {
    let users = UserRepository::new(state.pool.clone());

    let Some(user) = users.find_by_username(request.username.trim()).await? else {
        return Err(ApiError::unauthenticated("Invalid login credentials"));
    };

    if !verify_password(&request.password, &user.password_hash)? {
        return Err(ApiError::unauthenticated("Invalid login credentials"));
    }

    let token = state.tokens.issue(user.id)?;

    info!("User '{}' (id {}) logged in", user.username, user.id);

    Ok((
        StatusCode::OK,
        Json(LoginResponse {
            token,
            id: user.id,
        }),
    )
        .into_response())
}
