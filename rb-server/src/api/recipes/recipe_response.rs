use crate::RecipeDto;

use serde::{Deserialize, Serialize};

/// Single-recipe response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeResponse {
    pub recipe: RecipeDto,
}
