//! Player entity model and DTOs.

use bonuses_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `players` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Player {
    pub id: DbId,
    /// Unique external identifier (reported as `player_id`).
    pub external_id: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new player.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub external_id: String,
}

/// DTO for updating a player. The identifier is the only editable field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlayer {
    pub external_id: Option<String>,
}
