//! Handlers for the `/player-levels` resource, including level completion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bonuses_core::completion::CompletionStamp;
use bonuses_core::types::DbId;
use bonuses_db::models::player_level::{CompleteLevel, CreatePlayerLevel, PlayerLevelFilter};
use bonuses_db::repositories::PlayerLevelRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/player-levels?player_id=&level_id=&is_completed=&completed=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PlayerLevelFilter>,
) -> AppResult<impl IntoResponse> {
    let rows = PlayerLevelRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: rows }))
}

/// POST /api/v1/player-levels
///
/// Start a level for a player. 409 if the player already has a record for
/// this level.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayerLevel>,
) -> AppResult<impl IntoResponse> {
    let row = PlayerLevelRepo::create(&state.pool, &input).await?;
    tracing::info!(
        player_level_id = row.id,
        player_id = row.player_id,
        level_id = row.level_id,
        "Level started",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: row })))
}

/// GET /api/v1/player-levels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let row = PlayerLevelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("PlayerLevel", id))?;
    Ok(Json(DataResponse { data: row }))
}

/// DELETE /api/v1/player-levels/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PlayerLevelRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("PlayerLevel", id))
    }
}

/// POST /api/v1/player-levels/{id}/complete
///
/// Mark the level completed with today's date and the given score (default
/// 0), stamping every prize bound to the level. Completing an already
/// completed record overwrites it.
pub async fn complete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Option<Json<CompleteLevel>>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = body.unwrap_or_default();
    let stamp = CompletionStamp::new(state.clock.as_ref(), input.score)?;

    let completion = PlayerLevelRepo::complete(&state.pool, id, &stamp)
        .await?
        .ok_or(AppError::not_found("PlayerLevel", id))?;

    tracing::info!(
        player_level_id = id,
        score = stamp.score,
        completed_on = %stamp.completed_on,
        prizes_stamped = completion.prizes_stamped,
        was_completed = completion.was_completed,
        "Level completed",
    );

    Ok(Json(DataResponse { data: completion }))
}
