//! Route definitions for level prize bindings.

use axum::routing::get;
use axum::Router;

use crate::handlers::level_prize;
use crate::state::AppState;

/// Routes mounted at `/level-prizes`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(level_prize::list).post(level_prize::create))
        .route(
            "/{id}",
            get(level_prize::get_by_id).delete(level_prize::delete),
        )
}
