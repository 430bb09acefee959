//! Handlers for the `/prizes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use bonuses_core::types::DbId;
use bonuses_core::validation::{validate_name, validate_optional_name};
use bonuses_db::models::prize::{CreatePrize, UpdatePrize};
use bonuses_db::repositories::PrizeRepo;

use crate::error::{AppError, AppResult};
use crate::query::SearchParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/prizes?search=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let prizes = PrizeRepo::list(&state.pool, params.term()).await?;
    Ok(Json(DataResponse { data: prizes }))
}

/// POST /api/v1/prizes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreatePrize>,
) -> AppResult<impl IntoResponse> {
    let input = CreatePrize {
        title: validate_name(&input.title, "title")?,
    };
    let prize = PrizeRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: prize })))
}

/// GET /api/v1/prizes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let prize = PrizeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::not_found("Prize", id))?;
    Ok(Json(DataResponse { data: prize }))
}

/// PUT /api/v1/prizes/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePrize>,
) -> AppResult<impl IntoResponse> {
    let input = UpdatePrize {
        title: validate_optional_name(input.title.as_deref(), "title")?,
    };
    let prize = PrizeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::not_found("Prize", id))?;
    Ok(Json(DataResponse { data: prize }))
}

/// DELETE /api/v1/prizes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if PrizeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("Prize", id))
    }
}
