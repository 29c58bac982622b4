pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;


pub use api::{
    auth::{
        auth::{login, register},
        login_request::LoginRequest,
        login_response::LoginResponse,
        register_request::RegisterRequest,
        token_response::TokenResponse,
    },
    categories::{
        categories::{create_category, delete_category, update_category},
        category_dto::CategoryDto,
        category_response::CategoryResponse,
        create_category_request::CreateCategoryRequest,
        update_category_request::UpdateCategoryRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::current_user::CurrentUser,
    message_response::MessageResponse,
    recipes::{
        create_recipe_request::CreateRecipeRequest,
        list_recipes_query::ListRecipesQuery,
        recipe_dto::RecipeDto,
        recipe_list_response::RecipeListResponse,
        recipe_response::RecipeResponse,
        recipes::{create_recipe, delete_recipe, get_recipe, list_recipes, update_recipe},
        update_recipe_request::UpdateRecipeRequest,
    },
};

pub use crate::app_state::AppState;
pub use crate::routes::build_router;

use crate::error::ServerError;

use rb_auth::TokenService;

use std::error::Error;
use std::sync::Arc;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = rb_config::Config::load().map_err(ServerError::from)?;
    config.validate().map_err(ServerError::from)?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = rb_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rb-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Initialize database pool
    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(
            SqliteConnectOptions::new()
                .filename(database_path)
                .create_if_missing(true)
                .foreign_keys(true)
                .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
                .synchronous(sqlx::sqlite::SqliteSynchronous::Normal)
                .busy_timeout(std::time::Duration::from_secs(5)),
        )
        .await?;

    info!("Database connection established");

    // Run migrations
    info!("Running database migrations...");
    sqlx::migrate!("../crates/rb-db/migrations").run(&pool).await?;
    info!("Migrations complete");

    // validate() already rejected a missing secret; this guards the
    // type-level Option
    let Some(secret) = config.auth.jwt_secret.as_deref() else {
        return Err("auth.jwt_secret is not configured".into());
    };
    let tokens = Arc::new(TokenService::with_hs256(
        secret.as_bytes(),
        config.auth.token_ttl_secs,
    ));
    info!("Token service initialized (HS256, ttl {}s)", config.auth.token_ttl_secs);

    // Build application state and router
    let app_state = AppState { pool, tokens };
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Start server with graceful shutdown on SIGINT
    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Received SIGINT (Ctrl+C), shutting down");
        })
        .await?;

    Ok(())
}
