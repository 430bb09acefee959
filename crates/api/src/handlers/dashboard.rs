//! Handler for the admin dashboard counts.

use axum::extract::State;
use axum::Json;
use bonuses_db::models::dashboard::DashboardStats;
use bonuses_db::repositories::DashboardRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin-dashboard/
///
/// Total players, total levels, and player levels marked completed.
pub async fn admin_dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<DashboardStats>>> {
    let stats = DashboardRepo::stats(&state.pool).await?;
    Ok(Json(DataResponse { data: stats }))
}
