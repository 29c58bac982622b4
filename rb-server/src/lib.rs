pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    categories::{
        categories::{create_category, delete_category, update_category},
        category_dto::CategoryDto,
        category_response::CategoryResponse,
        create_category_request::CreateCategoryRequest,
        update_category_request::UpdateCategoryRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    message_response::MessageResponse,
    recipes::{
        create_recipe_request::CreateRecipeRequest,
        list_recipes_query::ListRecipesQuery,
        recipe_dto::RecipeDto,
        recipe_list_response::RecipeListResponse,
        recipe_response::RecipeResponse,
        recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe},
        update_recipe_request::UpdateRecipeRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;
