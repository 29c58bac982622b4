use crate::api::error::ApiError;
use crate::app_state::AppState;

use rb_auth::AuthError;

use std::panic::Location;

use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;

/// Authenticated caller identity, extracted from the request's bearer token.
///
/// Accepts `Authorization: Bearer <token>` or the legacy `x-access-token`
/// header. Token verification is stateless; the claims carry everything
/// needed to establish identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: i64,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_token(parts)?;
        let claims = state.tokens.verify(&token)?;
        let user_id = claims.user_id()?;

        Ok(CurrentUser { user_id })
    }
}

/// Pull the raw token out of the request headers.
#[track_caller]
fn extract_token(parts: &Parts) -> Result<String, AuthError> {
    if let Some(value) = parts.headers.get(axum::http::header::AUTHORIZATION) {
        let value = value.to_str().map_err(|_| AuthError::InvalidToken {
            message: "authorization header is not valid UTF-8".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let Some(token) = value.strip_prefix("Bearer ") else {
            return Err(AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        return Ok(token.trim().to_string());
    }

    // Legacy clients send the token bare in x-access-token
    if let Some(value) = parts.headers.get("x-access-token") {
        let token = value.to_str().map_err(|_| AuthError::InvalidToken {
            message: "x-access-token header is not valid UTF-8".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        return Ok(token.trim().to_string());
    }

    Err(AuthError::MissingToken {
        location: ErrorLocation::from(Location::caller()),
    })
}
