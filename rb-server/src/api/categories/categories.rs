//! Category handlers, nested under their parent recipe.
//!
//! Ownership is transitive: every handler resolves the parent recipe
//! first and authorizes against its owner. A category id that exists
//! but hangs off a different recipe is treated as not found.

use crate::api::error::{ApiError, Result as ApiErrorResult};
use crate::app_state::AppState;
use crate::{
    CategoryDto, CategoryResponse, CreateCategoryRequest, CurrentUser, MessageResponse,
    UpdateCategoryRequest,
};

use rb_auth::authorize;
use rb_core::{Category, Recipe, models::require_name};
use rb_db::{CategoryRepository, RecipeRepository};

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::info;

/// Resolve the parent recipe and check the caller owns it.
async fn resolve_owned_recipe(
    state: &AppState,
    user: CurrentUser,
    recipe_id: i64,
) -> ApiErrorResult<Recipe> {
    let recipes = RecipeRepository::new(state.pool.clone());

    let Some(recipe) = recipes.find_by_id(recipe_id).await? else {
        return Err(ApiError::not_found(format!(
            "Recipe {} not found",
            recipe_id
        )));
    };
    authorize(user.user_id, recipe.created_by)?;

    Ok(recipe)
}

/// POST /recipes/{id}/categories - add a category to a recipe
pub async fn create_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(recipe_id): Path<i64>,
    Json(request): Json<CreateCategoryRequest>,
) -> ApiErrorResult<Response> {
    require_name(&request.name, "name")?;

    let recipe = resolve_owned_recipe(&state, user, recipe_id).await?;

    let name = request.name.trim();
    let categories = CategoryRepository::new(state.pool.clone());

    if categories
        .find_by_recipe_and_name(recipe.id, name)
        .await?
        .is_some()
    {
        return Err(ApiError::duplicate_name(format!(
            "Category '{}' already exists",
            name
        )));
    }

    let mut category = Category::new(name.to_string(), recipe.id);
    category.id = categories.create(&category).await?;

    info!(
        "User {} added category {} to recipe {}",
        user.user_id, category.id, recipe.id
    );

    Ok((
        StatusCode::CREATED,
        Json(CategoryResponse {
            category: CategoryDto::from(category),
        }),
    )
        .into_response())
}

/// PUT /recipes/{id}/categories/{category_id} - rename or complete
pub async fn update_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((recipe_id, category_id)): Path<(i64, i64)>,
    Json(request): Json<UpdateCategoryRequest>,
) -> ApiErrorResult<Response> {
    require_name(&request.name, "name")?;

    let recipe = resolve_owned_recipe(&state, user, recipe_id).await?;

    let name = request.name.trim();
    let categories = CategoryRepository::new(state.pool.clone());

    let Some(mut category) = categories.find_by_id(category_id).await? else {
        return Err(ApiError::not_found(format!(
            "Category {} not found",
            category_id
        )));
    };
    if category.recipe_id != recipe.id {
        return Err(ApiError::not_found(format!(
            "Category {} not found",
            category_id
        )));
    }

    if let Some(existing) = categories.find_by_recipe_and_name(recipe.id, name).await? {
        if existing.id != category.id {
            return Err(ApiError::duplicate_name(format!(
                "Category '{}' already exists",
                name
            )));
        }
    }

    category.name = name.to_string();
    if let Some(done) = request.done {
        category.done = done;
    }
    category.touch();

    categories
        .update(
            category.id,
            &category.name,
            category.done,
            category.date_modified,
        )
        .await?;

    info!(
        "User {} updated category {} on recipe {}",
        user.user_id, category.id, recipe.id
    );

    Ok((
        StatusCode::OK,
        Json(CategoryResponse {
            category: CategoryDto::from(category),
        }),
    )
        .into_response())
}

/// DELETE /recipes/{id}/categories/{category_id}
pub async fn delete_category(
    State(state): State<AppState>,
    user: CurrentUser,
    Path((recipe_id, category_id)): Path<(i64, i64)>,
) -> ApiErrorResult<Response> {
    let recipe = resolve_owned_recipe(&state, user, recipe_id).await?;

    let categories = CategoryRepository::new(state.pool.clone());

    let Some(category) = categories.find_by_id(category_id).await? else {
        return Err(ApiError::not_found(format!(
            "Category {} not found",
            category_id
        )));
    };
    if category.recipe_id != recipe.id {
        return Err(ApiError::not_found(format!(
            "Category {} not found",
            category_id
        )));
    }

    categories.delete(category.id).await?;

    info!(
        "User {} deleted category {} from recipe {}",
        user.user_id, category.id, recipe.id
    );

    Ok((
        StatusCode::OK,
        Json(MessageResponse::new("Category deleted")),
    )
        .into_response())
}
