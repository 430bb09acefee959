//! Handlers for the `/level-prizes` resource.
//!
//! Bindings are created and removed here; their receipt date is only
//! written by level completion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bonuses_core::types::DbId;
use bonuses_db::models::level_prize::{CreateLevelPrize, LevelPrizeFilter};
use bonuses_db::repositories::LevelPrizeRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/level-prizes?level_id=&prize_id=&received=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<LevelPrizeFilter>,
) -> AppResult<impl IntoResponse> {
    let bindings = LevelPrizeRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: bindings }))
}

/// POST /api/v1/level-prizes
///
/// 409 if the prize is already bound to the level.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLevelPrize>,
) -> AppResult<impl IntoResponse> {
    let binding = LevelPrizeRepo::create(&state.pool, &input).await?;
    tracing::info!(
        level_id = binding.level_id,
        prize_id = binding.prize_id,
        "Prize bound to level",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: binding })))
}

/// GET /api/v1/level-prizes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let binding = LevelPrizeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("LevelPrize", id))?;
    Ok(Json(DataResponse { data: binding }))
}

/// DELETE /api/v1/level-prizes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if LevelPrizeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("LevelPrize", id))
    }
}
