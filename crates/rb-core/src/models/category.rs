//! Category entity - a completable sub-item of a recipe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ownership of a category is transitive: whoever owns the parent
/// recipe owns the category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub done: bool,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub recipe_id: i64,
}

impl Category {
    /// Build an unsaved category; the repository assigns the id on insert.
    pub fn new(name: String, recipe_id: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            done: false,
            date_created: now,
            date_modified: now,
            recipe_id,
        }
    }

    pub fn touch(&mut self) {
        self.date_modified = Utc::now();
    }
}
