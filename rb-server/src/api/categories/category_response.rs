use crate::CategoryDto;

use serde::{Deserialize, Serialize};

/// Single-category response envelope
#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryResponse {
    pub category: CategoryDto,
}
