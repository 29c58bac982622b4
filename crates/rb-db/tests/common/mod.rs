#![allow(dead_code)]

use rb_core::{Category, Recipe};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .expect("Failed to enable foreign keys");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Insert a user row directly and return its id
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> i64 {
    sqlx::query("INSERT INTO users (username, password_hash) VALUES (?, ?)")
        .bind(username)
        .bind("$argon2id$test$hash")
        .execute(pool)
        .await
        .expect("Failed to create test user")
        .last_insert_rowid()
}

/// Creates an unsaved test Recipe
pub fn create_test_recipe(owner_id: i64) -> Recipe {
    Recipe::new("games to buy".to_string(), owner_id)
}

/// Creates an unsaved test Category
pub fn create_test_category(recipe_id: i64) -> Category {
    Category::new("consoles".to_string(), recipe_id)
}
