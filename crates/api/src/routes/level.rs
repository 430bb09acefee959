//! Route definitions for levels.

use axum::routing::get;
use axum::Router;

use crate::handlers::level;
use crate::state::AppState;

/// Routes mounted at `/levels`.
///
/// ```text
/// GET    /              -> list
/// POST   /              -> create
/// GET    /{id}          -> get_by_id
/// PUT    /{id}          -> update
/// DELETE /{id}          -> delete
/// GET    /{id}/prizes   -> list_prizes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(level::list).post(level::create))
        .route(
            "/{id}",
            get(level::get_by_id)
                .put(level::update)
                .delete(level::delete),
        )
        .route("/{id}/prizes", get(level::list_prizes))
}
