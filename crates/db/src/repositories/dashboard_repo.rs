//! Aggregate counts for the admin dashboard.

use sqlx::PgPool;

use crate::models::dashboard::DashboardStats;

pub struct DashboardRepo;

impl DashboardRepo {
    /// Count players, levels, and completed player levels in one round trip.
    pub async fn stats(pool: &PgPool) -> Result<DashboardStats, sqlx::Error> {
        sqlx::query_as::<_, DashboardStats>(
            "SELECT \
                (SELECT COUNT(*) FROM players) AS total_players, \
                (SELECT COUNT(*) FROM levels) AS total_levels, \
                (SELECT COUNT(*) FROM player_levels WHERE is_completed) AS completed_levels",
        )
        .fetch_one(pool)
        .await
    }
}
