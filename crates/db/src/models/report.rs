//! Row shape of the player level report query.

use bonuses_core::report::ReportLine;
use bonuses_core::types::DbId;
use sqlx::FromRow;

/// One joined player level row, in report order.
#[derive(Debug, Clone, FromRow)]
pub struct PlayerLevelReportRow {
    pub player_level_id: DbId,
    pub player_external_id: String,
    pub level_title: String,
    pub level_sort_order: i32,
    pub is_completed: bool,
    /// Any prize bound to the level has a receipt date.
    pub prize_reserved: bool,
}

impl PlayerLevelReportRow {
    pub fn as_line(&self) -> ReportLine<'_> {
        ReportLine {
            player_id: &self.player_external_id,
            level_name: &self.level_title,
            level_complete: self.is_completed,
            prize_reserved: self.prize_reserved,
        }
    }

    /// Keyset position just after this row.
    pub fn cursor(&self) -> ReportCursor {
        ReportCursor {
            player_external_id: self.player_external_id.clone(),
            level_sort_order: self.level_sort_order,
            player_level_id: self.player_level_id,
        }
    }
}

/// Keyset pagination position: `(external_id, sort_order, player_level.id)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportCursor {
    pub player_external_id: String,
    pub level_sort_order: i32,
    pub player_level_id: DbId,
}
