//! Route definitions for prizes.

use axum::routing::get;
use axum::Router;

use crate::handlers::prize;
use crate::state::AppState;

/// Routes mounted at `/prizes`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(prize::list).post(prize::create))
        .route(
            "/{id}",
            get(prize::get_by_id)
                .put(prize::update)
                .delete(prize::delete),
        )
}
