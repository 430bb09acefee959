//! Repository for the `level_prizes` table.
//!
//! `received` is never written here; see `PlayerLevelRepo::complete`.

use bonuses_core::types::DbId;
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::level_prize::{CreateLevelPrize, LevelPrize, LevelPrizeFilter};

const COLUMNS: &str = "id, level_id, prize_id, received, created_at, updated_at";

pub struct LevelPrizeRepo;

impl LevelPrizeRepo {
    /// Bind a prize to a level, returning the created row.
    ///
    /// Fails with a unique violation on `uq_level_prizes_level_prize` if the
    /// prize is already bound to the level.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLevelPrize,
    ) -> Result<LevelPrize, sqlx::Error> {
        let query = format!(
            "INSERT INTO level_prizes (level_id, prize_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LevelPrize>(&query)
            .bind(input.level_id)
            .bind(input.prize_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LevelPrize>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM level_prizes WHERE id = $1");
        sqlx::query_as::<_, LevelPrize>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List bindings matching every supplied filter.
    ///
    /// `search` is a case-insensitive substring of the level or prize title.
    pub async fn list(
        pool: &PgPool,
        filter: &LevelPrizeFilter,
    ) -> Result<Vec<LevelPrize>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM level_prizes lp \
             WHERE ($1::BIGINT IS NULL OR lp.level_id = $1) \
               AND ($2::BIGINT IS NULL OR lp.prize_id = $2) \
               AND ($3::BOOLEAN IS NULL OR (lp.received IS NOT NULL) = $3) \
               AND ($4::TEXT IS NULL \
                    OR EXISTS (SELECT 1 FROM levels l \
                               WHERE l.id = lp.level_id AND l.title ILIKE $4) \
                    OR EXISTS (SELECT 1 FROM prizes z \
                               WHERE z.id = lp.prize_id AND z.title ILIKE $4)) \
             ORDER BY lp.level_id, lp.prize_id"
        );
        sqlx::query_as::<_, LevelPrize>(&query)
            .bind(filter.level_id)
            .bind(filter.prize_id)
            .bind(filter.received)
            .bind(filter.search_term().map(contains_pattern))
            .fetch_all(pool)
            .await
    }

    /// All prize bindings of one level.
    pub async fn list_by_level(
        pool: &PgPool,
        level_id: DbId,
    ) -> Result<Vec<LevelPrize>, sqlx::Error> {
        let filter = LevelPrizeFilter {
            level_id: Some(level_id),
            ..Default::default()
        };
        Self::list(pool, &filter).await
    }

    /// Remove a binding. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM level_prizes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
