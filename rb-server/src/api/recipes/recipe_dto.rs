use crate::CategoryDto;

use rb_core::{Category, Recipe};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Recipe representation returned by the API, with its categories
/// embedded.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeDto {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub created_by: i64,
    pub categories: Vec<CategoryDto>,
}

impl RecipeDto {
    pub fn from_recipe(recipe: Recipe, categories: Vec<Category>) -> Self {
        RecipeDto {
            id: recipe.id,
            name: recipe.name,
            date_created: recipe.date_created,
            date_modified: recipe.date_modified,
            created_by: recipe.created_by,
            categories: categories.into_iter().map(CategoryDto::from).collect(),
        }
    }
}
