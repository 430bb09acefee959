//! Repository for the `players` table.

use bonuses_core::types::DbId;
use sqlx::PgPool;

use super::contains_pattern;
use crate::models::player::{CreatePlayer, Player, UpdatePlayer};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, external_id, created_at, updated_at";

/// Provides CRUD operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a new player, returning the created row.
    ///
    /// Fails with a unique violation on `uq_players_external_id` if the
    /// identifier is taken.
    pub async fn create(pool: &PgPool, input: &CreatePlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players (external_id) VALUES ($1) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.external_id)
            .fetch_one(pool)
            .await
    }

    /// Find a player by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a player by external identifier.
    pub async fn find_by_external_id(
        pool: &PgPool,
        external_id: &str,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE external_id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(external_id)
            .fetch_optional(pool)
            .await
    }

    /// List players ordered by identifier, optionally filtered by a
    /// case-insensitive substring of the identifier.
    ///
    /// `external_id` is stored with the `"C"` collation, which only folds
    /// ASCII case, so the match runs under the database default collation.
    pub async fn list(pool: &PgPool, search: Option<&str>) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM players \
             WHERE $1::TEXT IS NULL OR (external_id COLLATE \"default\") ILIKE $1 \
             ORDER BY external_id"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(search.map(contains_pattern))
            .fetch_all(pool)
            .await
    }

    /// Update a player. Only non-`None` fields are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdatePlayer,
    ) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET external_id = COALESCE($2, external_id) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .bind(&input.external_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a player. Their player level rows are removed by cascade.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total number of players.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM players")
            .fetch_one(pool)
            .await
    }
}
