//! Level prize binding model and DTOs.

use bonuses_core::types::{CalendarDate, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `level_prizes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LevelPrize {
    pub id: DbId,
    pub level_id: DbId,
    pub prize_id: DbId,
    /// Date the prize was last received. Level-wide, not per player.
    pub received: Option<CalendarDate>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for binding a prize to a level. At most one row per (level, prize).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLevelPrize {
    pub level_id: DbId,
    pub prize_id: DbId,
}

/// List filters (`?level_id=&prize_id=&received=&search=`).
///
/// `received=true` keeps rows with a receipt date, `false` rows without.
/// `search` matches the level or prize title.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LevelPrizeFilter {
    pub level_id: Option<DbId>,
    pub prize_id: Option<DbId>,
    pub received: Option<bool>,
    pub search: Option<String>,
}

impl LevelPrizeFilter {
    /// The search term, or `None` if absent or blank.
    pub fn search_term(&self) -> Option<&str> {
        crate::models::non_blank(self.search.as_deref())
    }
}
