//! Repository for the `prizes` table.

use bonuses_core::types::DbId;
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::prize::{CreatePrize, Prize, UpdatePrize};

const COLUMNS: &str = "id, title, created_at, updated_at";

/// Provides CRUD operations for prizes.
pub struct PrizeRepo;

impl PrizeRepo {
    pub async fn create(pool: &PgPool, input: &CreatePrize) -> Result<Prize, sqlx::Error> {
        let query = format!("INSERT INTO prizes (title) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Prize>(&query)
            .bind(&input.title)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Prize>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prizes WHERE id = $1");
        sqlx::query_as::<_, Prize>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List prizes by title, optionally filtered by a case-insensitive
    /// substring of the title.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Prize>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM prizes \
             WHERE $1::TEXT IS NULL OR title ILIKE $1 \
             ORDER BY title, id"
        );
        sqlx::query_as::<_, Prize>(&query)
            .bind(search.map(contains_pattern))
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePrize,
    ) -> Result<Option<Prize>, sqlx::Error> {
        let query = format!(
            "UPDATE prizes SET title = COALESCE($2, title) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Prize>(&query)
            .bind(id)
            .bind(&input.title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a prize and its level bindings.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM prizes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
