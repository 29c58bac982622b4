use serde::{Deserialize, Serialize};

/// Body returned on successful registration
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}
