//! Recipe entity - a named, owned collection of categories.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recipe belongs to exactly one identity. `created_by` is the sole
/// basis for authorization and never changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: i64,
    pub name: String,
    pub date_created: DateTime<Utc>,
    pub date_modified: DateTime<Utc>,
    pub created_by: i64,
}

impl Recipe {
    /// Build an unsaved recipe; the repository assigns the id on insert.
    pub fn new(name: String, created_by: i64) -> Self {
        let now = Utc::now();
        Self {
            id: 0,
            name,
            date_created: now,
            date_modified: now,
            created_by,
        }
    }

    pub fn touch(&mut self) {
        self.date_modified = Utc::now();
    }
}
