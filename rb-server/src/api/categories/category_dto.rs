use rb_core::Category;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category representation returned by the API
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub done: bool,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub recipe_id: i64,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        CategoryDto {
            id: category.id,
            name: category.name,
            done: category.done,
            date_created: category.date_created,
            date_modified: category.date_modified,
            recipe_id: category.recipe_id,
        }
    }
}
