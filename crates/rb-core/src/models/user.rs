use serde::{Deserialize, Serialize};

/// A registered identity. The password hash is an Argon2 PHC string and
/// is never re-derived after registration (there is no password-change
/// path), so this struct is effectively immutable once persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Opaque numeric id assigned by the store at registration.
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
}
