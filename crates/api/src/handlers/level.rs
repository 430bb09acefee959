//! Handlers for the `/levels` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bonuses_core::types::DbId;
use bonuses_core::validation::{validate_name, validate_optional_name};
use bonuses_db::models::level::{CreateLevel, UpdateLevel};
use bonuses_db::repositories::{LevelPrizeRepo, LevelRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/levels
///
/// Levels in progression order.
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let levels = LevelRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: levels }))
}

/// POST /api/v1/levels
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLevel>,
) -> AppResult<impl IntoResponse> {
    let input = CreateLevel {
        title: validate_name(&input.title, "title")?,
        sort_order: input.sort_order,
    };
    let level = LevelRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: level })))
}

/// GET /api/v1/levels/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let level = LevelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Level", id))?;
    Ok(Json(DataResponse { data: level }))
}

/// PUT /api/v1/levels/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateLevel>,
) -> AppResult<impl IntoResponse> {
    let input = UpdateLevel {
        title: validate_optional_name(input.title.as_deref(), "title")?,
        sort_order: input.sort_order,
    };
    let level = LevelRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Level", id))?;
    Ok(Json(DataResponse { data: level }))
}

/// DELETE /api/v1/levels/{id}
///
/// Removes the level's player records and prize bindings by cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if LevelRepo::delete(&state.pool, id).await? {
        tracing::info!(level_id = id, "Level deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Level", id))
    }
}

/// GET /api/v1/levels/{id}/prizes
///
/// Prize bindings of one level, with their receipt dates.
pub async fn list_prizes(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    LevelRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Level", id))?;
    let bindings = LevelPrizeRepo::list_by_level(&state.pool, id).await?;
    Ok(Json(DataResponse { data: bindings }))
}
