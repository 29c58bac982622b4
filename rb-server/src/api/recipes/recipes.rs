//! Recipe CRUD handlers.
//!
//! Every handler follows the same pipeline: authenticate (via the
//! `CurrentUser` extractor), resolve the resource, authorize against
//! its owner, then act. Resolution precedes authorization, so a
//! missing recipe is 404 regardless of who asks.

use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::app_state::AppState;
use crate::{
    CreateRecipeRequest, CurrentUser, ListRecipesQuery, MessageResponse, RecipeDto,
    RecipeListResponse, RecipeResponse, UpdateRecipeRequest,
};

use rb_auth::authorize;
use rb_core::{Recipe, models::require_name};
use rb_db::{CategoryRepository, RecipeRepository};

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;

/// POST /recipes - create a recipe owned by the caller
pub async fn create_recipe(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateRecipeRequest>,
) -> ApiErrorResult<Response> {
    require_name(&request.name, "name")?;

    let name = request.name.trim();
    let recipes = RecipeRepository::new(state.pool.clone());

    if recipes
        .find_by_owner_and_name(user.user_id, name)
        .await?
        .is_some()
    {
        return Err(ApiError::duplicate_name(format!(
            "Recipe '{}' already exists",
            name
        )));
    }

    let mut recipe = Recipe::new(name.to_string(), user.user_id);
    recipe.id = recipes.create(&recipe).await?;

    info!("User {} created recipe {} '{}'", user.user_id, recipe.id, recipe.name);

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse {
            recipe: RecipeDto::from_recipe(recipe, Vec::new()),
        }),
    )
        .into_response())
}

/// GET /recipes - list the caller's recipes, optionally filtered
pub async fn list_recipes(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(query): Query<ListRecipesQuery>,
) -> ApiErrorResult<Response> {
    let recipes = RecipeRepository::new(state.pool.clone());
    let categories = CategoryRepository::new(state.pool.clone());

    let found = recipes
        .find_by_owner(user.user_id, query.q.as_deref(), query.limit)
        .await?;

    let mut dtos = Vec::with_capacity(found.len());
    for recipe in found {
        let recipe_categories = categories.find_by_recipe(recipe.id).await?;
        dtos.push(RecipeDto::from_recipe(recipe, recipe_categories));
    }

    Ok((StatusCode::OK, Json(RecipeListResponse { recipes: dtos })).into_response())
}

/// GET /recipes/{id} - fetch one recipe with its categories
pub async fn get_recipe(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiErrorResult<Response> {
    let recipes = RecipeRepository::new(state.pool.clone());
    let categories = CategoryRepository::new(state.pool.clone());

    let Some(recipe) = recipes.find_by_id(id).await? else {
        return Err(ApiError::not_found(format!("Recipe {} not found", id)));
    };
    authorize(user.user_id, recipe.created_by)?;

    let recipe_categories = categories.find_by_recipe(recipe.id).await?;

    Ok((
        StatusCode::OK,
        Json(RecipeResponse {
            recipe: RecipeDto::from_recipe(recipe, recipe_categories),
        }),
    )
        .into_response())
}

/// PUT /recipes/{id} - rename a recipe
pub async fn update_recipe(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateRecipeRequest>,
) -> ApiErrorResult<Response> {
    require_name(&request.name, "name")?;

    let name = request.name.trim();
    let recipes = RecipeRepository::new(state.pool.clone());
    let categories = CategoryRepository::new(state.pool.clone());

    let Some(mut recipe) = recipes.find_by_id(id).await? else {
        return Err(ApiError::not_found(format!("Recipe {} not found", id)));
    };
    authorize(user.user_id, recipe.created_by)?;

    // The new name must stay unique among the caller's recipes.
    if let Some(existing) = recipes.find_by_owner_and_name(user.user_id, name).await? {
        if existing.id != recipe.id {
            return Err(ApiError::duplicate_name(format!(
                "Recipe '{}' already exists",
                name
            )));
        }
    }

    recipe.name = name.to_string();
    recipe.touch();
    recipes
        .update_name(recipe.id, &recipe.name, recipe.date_modified)
        .await?;

    info!("User {} renamed recipe {}", user.user_id, recipe.id);

    let recipe_categories = categories.find_by_recipe(recipe.id).await?;

    Ok((
        StatusCode::OK,
        Json(RecipeResponse {
            recipe: RecipeDto::from_recipe(recipe, recipe_categories),
        }),
    )
        .into_response())
}

/// DELETE /recipes/{id} - remove a recipe and all of its categories
pub async fn delete_recipe(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i64>,
) -> ApiErrorResult<Response> {
    let recipes = RecipeRepository::new(state.pool.clone());

    let Some(recipe) = recipes.find_by_id(id).await? else {
        return Err(ApiError::not_found(format!("Recipe {} not found", id)));
    };
    authorize(user.user_id, recipe.created_by)?;

    recipes.delete(recipe.id).await?;

    info!("User {} deleted recipe {}", user.user_id, recipe.id);

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Recipe deleted")),
    )
        .into_response())
}
