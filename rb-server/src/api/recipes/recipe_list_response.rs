use crate::RecipeDto;

use serde::{Deserialize, Serialize};

/// Recipe-collection response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse {
    pub recipes: Vec<RecipeDto>,
}
