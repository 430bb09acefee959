//! Repository for the `player_levels` table, including level completion.

use bonuses_core::completion::CompletionStamp;
use bonuses_core::types::DbId;
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::player_level::{
    CreatePlayerLevel, LevelCompletion, PlayerLevel, PlayerLevelFilter,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, player_id, level_id, completed, is_completed, score, created_at, updated_at";

/// Provides CRUD operations and the completion workflow for player levels.
pub struct PlayerLevelRepo;

impl PlayerLevelRepo {
    /// Start a level for a player (state "in progress").
    ///
    /// Fails with a unique violation on `uq_player_levels_player_level` if
    /// the player already has a row for this level, and with a foreign key
    /// violation if either side does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreatePlayerLevel,
    ) -> Result<PlayerLevel, sqlx::Error> {
        let query = format!(
            "INSERT INTO player_levels (player_id, level_id) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PlayerLevel>(&query)
            .bind(input.player_id)
            .bind(input.level_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<PlayerLevel>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM player_levels WHERE id = $1");
        sqlx::query_as::<_, PlayerLevel>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List player levels matching every supplied filter, oldest first.
    ///
    /// `search` is a case-insensitive substring of the player's external id
    /// or the level title.
    pub async fn list(
        pool: &PgPool,
        filter: &PlayerLevelFilter,
    ) -> Result<Vec<PlayerLevel>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM player_levels pl \
             WHERE ($1::BIGINT IS NULL OR pl.player_id = $1) \
               AND ($2::BIGINT IS NULL OR pl.level_id = $2) \
               AND ($3::BOOLEAN IS NULL OR pl.is_completed = $3) \
               AND ($4::DATE IS NULL OR pl.completed = $4) \
               AND ($5::TEXT IS NULL \
                    OR EXISTS (SELECT 1 FROM players p \
                               WHERE p.id = pl.player_id \
                                 AND (p.external_id COLLATE \"default\") ILIKE $5) \
                    OR EXISTS (SELECT 1 FROM levels l \
                               WHERE l.id = pl.level_id AND l.title ILIKE $5)) \
             ORDER BY pl.id"
        );
        sqlx::query_as::<_, PlayerLevel>(&query)
            .bind(filter.player_id)
            .bind(filter.level_id)
            .bind(filter.is_completed)
            .bind(filter.completed)
            .bind(filter.search_term().map(contains_pattern))
            .fetch_all(pool)
            .await
    }

    /// Delete a player level. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM player_levels WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark a player level completed and stamp every prize bound to its
    /// level with the completion date, in one transaction.
    ///
    /// Prize receipt dates are overwritten unconditionally, and calling this
    /// again on a completed row re-stamps everything with the new values.
    /// Returns `None` (and writes nothing) if the player level does not exist.
    pub async fn complete(
        pool: &PgPool,
        id: DbId,
        stamp: &CompletionStamp,
    ) -> Result<Option<LevelCompletion>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let was_completed: Option<bool> = sqlx::query_scalar(
            "SELECT is_completed FROM player_levels WHERE id = $1 FOR UPDATE",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(was_completed) = was_completed else {
            tx.rollback().await?;
            return Ok(None);
        };

        let query = format!(
            "UPDATE player_levels SET \
                is_completed = true, \
                completed = $2, \
                score = $3 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let player_level = sqlx::query_as::<_, PlayerLevel>(&query)
            .bind(id)
            .bind(stamp.completed_on)
            .bind(stamp.score)
            .fetch_one(&mut *tx)
            .await?;

        let stamped = sqlx::query("UPDATE level_prizes SET received = $2 WHERE level_id = $1")
            .bind(player_level.level_id)
            .bind(stamp.completed_on)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(LevelCompletion {
            player_level,
            prizes_stamped: stamped.rows_affected(),
            was_completed,
        }))
    }

    /// Number of player levels with `is_completed = true`.
    pub async fn count_completed(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM player_levels WHERE is_completed")
            .fetch_one(pool)
            .await
    }
}
