use serde::Deserialize;

/// Query parameters for GET /recipes
#[derive(Debug, Default, Deserialize)]
pub struct ListRecipesQuery {
    /// Case-sensitive name substring filter
    pub q: Option<String>,
    /// Maximum number of recipes to return
    pub limit: Option<i64>,
}
