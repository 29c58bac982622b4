use serde::{Deserialize, Serialize};

/// Body returned on successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
}
