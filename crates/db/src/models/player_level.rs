//! Player level (attempt) model and DTOs.
//!
//! A row exists once a player has started a level. `completed`,
//! `is_completed` and `score` are written only by
//! [`PlayerLevelRepo::complete`](crate::repositories::PlayerLevelRepo::complete).

use bonuses_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `player_levels` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlayerLevel {
    pub id: DbId,
    pub player_id: DbId,
    pub level_id: DbId,
    /// Date of the most recent completion.
    pub completed: Option<CalendarDate>,
    pub is_completed: bool,
    pub score: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for starting a level. At most one row per (player, level).
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayerLevel {
    pub player_id: DbId,
    pub level_id: DbId,
}

/// Request body for completing a level. `score` defaults to 0.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompleteLevel {
    pub score: Option<i64>,
}

/// List filters
/// (`?player_id=&level_id=&is_completed=&completed=&search=`).
///
/// `search` matches the player's external id or the level title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerLevelFilter {
    pub player_id: Option<DbId>,
    pub level_id: Option<DbId>,
    pub is_completed: Option<bool>,
    /// Exact completion date.
    pub completed: Option<CalendarDate>,
    pub search: Option<String>,
}

impl PlayerLevelFilter {
    /// The search term, or `None` if absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        crate::models::non_blank(self.search.as_deref())
    }
}

/// Outcome of a completion.
#[derive(Debug, Clone, Serialize)]
pub struct LevelCompletion {
    pub player_level: PlayerLevel,
    /// Prize bindings stamped with the completion date.
    pub prizes_stamped: u64,
    /// The row was already completed before this call.
    pub was_completed: bool,
}
