//! Handlers for the `/players` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bonuses_core::types::DbId;
use bonuses_core::validation::{validate_name, validate_optional_name};
use bonuses_db::models::player::{CreatePlayer, UpdatePlayer};
use bonuses_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/players?search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let players = PlayerRepo::list(&state.pool, params.term()).await?;
    Ok(Json(DataResponse { data: players }))
}

/// POST /api/v1/players
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePlayer>,
) -> AppResult<impl IntoResponse> {
    let input = CreatePlayer {
        external_id: validate_name(&input.external_id, "external_id")?,
    };
    let player = PlayerRepo::create(&state.pool, &input).await?;
    tracing::info!(player_id = player.id, external_id = %player.external_id, "Player created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: player })))
}

/// GET /api/v1/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Player", id))?;
    Ok(Json(DataResponse { data: player }))
}

/// PUT /api/v1/players/{id}
///
/// Only the external identifier can be changed.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePlayer>,
) -> AppResult<impl IntoResponse> {
    let input = UpdatePlayer {
        external_id: validate_optional_name(input.external_id.as_deref(), "external_id")?,
    };
    let player = PlayerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Player", id))?;
    Ok(Json(DataResponse { data: player }))
}

/// DELETE /api/v1/players/{id}
///
/// Removes the player's level records by cascade.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PlayerRepo::delete(&state.pool, id).await? {
        tracing::info!(player_id = id, "Player deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Player", id))
    }
}
