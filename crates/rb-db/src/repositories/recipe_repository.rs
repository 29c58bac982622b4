//! Recipe repository for CRUD operations on owned recipes.
//!
//! Every lookup that can miss returns `Option` - "not found" is a
//! value, never an error. Ownership is NOT checked here; callers run
//! the authorization guard against `created_by` after the lookup.

use crate::{DbError, Result as DbErrorResult};

use rb_core::Recipe;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct RecipeRepository {
    pool: SqlitePool,
}

impl RecipeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a recipe and return its assigned id.
    pub async fn create(&self, recipe: &Recipe) -> DbErrorResult<i64> {
        let date_created = recipe.date_created.timestamp();
        let date_modified = recipe.date_modified.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO recipes (name, date_created, date_modified, created_by)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&recipe.name)
        .bind(date_created)
        .bind(date_modified)
        .bind(recipe.created_by)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Recipe>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, date_created, date_modified, created_by
                FROM recipes
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Owner-scoped listing with optional name-substring filter and
    /// result limit. `limit = None` binds -1, which SQLite treats as
    /// unlimited.
    pub async fn find_by_owner(
        &self,
        owner_id: i64,
        name_filter: Option<&str>,
        limit: Option<i64>,
    ) -> DbErrorResult<Vec<Recipe>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, date_created, date_modified, created_by
                FROM recipes
                WHERE created_by = ?
                  AND (? IS NULL OR name LIKE '%' || ? || '%')
                ORDER BY id
                LIMIT ?
            "#,
        )
        .bind(owner_id)
        .bind(name_filter)
        .bind(name_filter)
        .bind(limit.unwrap_or(-1))
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_recipe).collect()
    }

    /// Exact-name lookup used for the per-owner uniqueness check.
    pub async fn find_by_owner_and_name(
        &self,
        owner_id: i64,
        name: &str,
    ) -> DbErrorResult<Option<Recipe>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, date_created, date_modified, created_by
                FROM recipes
                WHERE created_by = ? AND name = ?
            "#,
        )
        .bind(owner_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_recipe(&r)).transpose()
    }

    /// Rename a recipe, bumping `date_modified`. `created_by` is never
    /// part of any UPDATE.
    pub async fn update_name(
        &self,
        id: i64,
        name: &str,
        date_modified: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE recipes
                SET name = ?, date_modified = ?
                WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(date_modified.timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Delete a recipe and cascade over its categories in one
    /// transaction. A failure rolls the whole operation back.
    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM categories WHERE recipe_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM recipes WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }
}

fn row_to_recipe(row: &SqliteRow) -> DbErrorResult<Recipe> {
    let date_created: i64 = row.try_get("date_created")?;
    let date_modified: i64 = row.try_get("date_modified")?;

    Ok(Recipe {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        date_created: DateTime::from_timestamp(date_created, 0)
            .ok_or_else(|| DbError::decode("invalid timestamp in recipes.date_created"))?,
        date_modified: DateTime::from_timestamp(date_modified, 0)
            .ok_or_else(|| DbError::decode("invalid timestamp in recipes.date_modified"))?,
        created_by: row.try_get("created_by")?,
    })
}
