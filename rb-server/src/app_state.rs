use rb_auth::TokenService;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every handler. Cloning is cheap: the pool is
/// an Arc internally and the token service is wrapped in one.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
}
