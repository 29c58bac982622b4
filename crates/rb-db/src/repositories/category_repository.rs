//! Category repository. Categories live under a recipe; the foreign
//! key is enforced at creation and the parent recipe resolves who owns
//! them.

use crate::{DbError, Result as DbErrorResult};

use rb_core::Category;

use chrono::{DateTime, Utc};
use sqlx::{Row, SqlitePool, sqlite::SqliteRow};

pub struct CategoryRepository {
    pool: SqlitePool,
}

impl CategoryRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a category and return its assigned id.
    pub async fn create(&self, category: &Category) -> DbErrorResult<i64> {
        let result = sqlx::query(
            r#"
                INSERT INTO categories (name, done, date_created, date_modified, recipe_id)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&category.name)
        .bind(category.done)
        .bind(category.date_created.timestamp())
        .bind(category.date_modified.timestamp())
        .bind(category.recipe_id)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Category>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, done, date_created, date_modified, recipe_id
                FROM categories
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_category(&r)).transpose()
    }

    pub async fn find_by_recipe(&self, recipe_id: i64) -> DbErrorResult<Vec<Category>> {
        let rows = sqlx::query(
            r#"
                SELECT id, name, done, date_created, date_modified, recipe_id
                FROM categories
                WHERE recipe_id = ?
                ORDER BY id
            "#,
        )
        .bind(recipe_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(row_to_category).collect()
    }

    /// Exact-name lookup scoped to one recipe, for the duplicate check.
    pub async fn find_by_recipe_and_name(
        &self,
        recipe_id: i64,
        name: &str,
    ) -> DbErrorResult<Option<Category>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, done, date_created, date_modified, recipe_id
                FROM categories
                WHERE recipe_id = ? AND name = ?
            "#,
        )
        .bind(recipe_id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_category(&r)).transpose()
    }

    pub async fn update(
        &self,
        id: i64,
        name: &str,
        done: bool,
        date_modified: DateTime<Utc>,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE categories
                SET name = ?, done = ?, date_modified = ?
                WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(done)
        .bind(date_modified.timestamp())
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn delete(&self, id: i64) -> DbErrorResult<()> {
        sqlx::query("DELETE FROM categories WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn row_to_category(row: &SqliteRow) -> DbErrorResult<Category> {
    let date_created: i64 = row.try_get("date_created")?;
    let date_modified: i64 = row.try_get("date_modified")?;

    Ok(Category {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        done: row.try_get("done")?,
        date_created: DateTime::from_timestamp(date_created, 0)
            .ok_or_else(|| DbError::decode("invalid timestamp in categories.date_created"))?,
        date_modified: DateTime::from_timestamp(date_modified, 0)
            .ok_or_else(|| DbError::decode("invalid timestamp in categories.date_modified"))?,
        recipe_id: row.try_get("recipe_id")?,
    })
}
