//! Route definitions for player levels.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::player_level;
use crate::state::AppState;

/// Routes mounted at `/player-levels`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /{id}            -> get_by_id
/// DELETE /{id}            -> delete
/// POST   /{id}/complete   -> complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(player_level::list).post(player_level::create))
        .route(
            "/{id}",
            get(player_level::get_by_id).delete(player_level::delete),
        )
        .route("/{id}/complete", post(player_level::complete))
}
