//! Repository for the `levels` table.

use bonuses_core::types::DbId;
use sqlx::PgPool;

use crate::models::level::{CreateLevel, Level, UpdateLevel};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, sort_order, created_at, updated_at";

/// Provides CRUD operations for levels.
pub struct LevelRepo;

impl LevelRepo {
    /// Insert a new level, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLevel) -> Result<Level, sqlx::Error> {
        let query = format!(
            "INSERT INTO levels (title, sort_order) \
             VALUES ($1, COALESCE($2, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Level>(&query)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a level by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Level>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM levels WHERE id = $1");
        sqlx::query_as::<_, Level>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all levels in progression order (sort_order, then id).
    pub async fn list(pool: &PgPool) -> Result<Vec<Level>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM levels ORDER BY sort_order, id");
        sqlx::query_as::<_, Level>(&query).fetch_all(pool).await
    }

    /// Update a level. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLevel,
    ) -> Result<Option<Level>, sqlx::Error> {
        let query = format!(
            "UPDATE levels SET \
                title = COALESCE($2, title), \
                sort_order = COALESCE($3, sort_order) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Level>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a level together with its player levels and prize bindings.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM levels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of levels.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM levels")
            .fetch_one(pool)
            .await
    }
}
