pub mod create_recipe_request;
pub mod list_recipes_query;
pub mod recipe_dto;
pub mod recipe_list_response;
pub mod recipe_response;
pub mod recipes;
pub mod update_recipe_request;
