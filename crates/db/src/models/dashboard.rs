//! Aggregate counts shown on the admin dashboard.

use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_players: i64,
    pub total_levels: i64,
    /// Player level rows with `is_completed = true`.
    pub completed_levels: i64,
}
