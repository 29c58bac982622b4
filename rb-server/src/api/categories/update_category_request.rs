use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: String,
    /// Completion flag; omitted means unchanged
    pub done: Option<bool>,
}
