pub mod health;
pub mod level;
pub mod level_prize;
pub mod player;
pub mod player_level;
pub mod prize;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` admin route tree.
///
/// Route hierarchy:
///
/// ```text
/// /players                                 list (?search=), create
/// /players/{id}                            get, update, delete
///
/// /levels                                  list, create
/// /levels/{id}                             get, update, delete
/// /levels/{id}/prizes                      prize bindings of the level (GET)
///
/// /prizes                                  list (?search=), create
/// /prizes/{id}                             get, update, delete
///
/// /player-levels                           list (?player_id=&level_id=&is_completed=&completed=&search=), create
/// /player-levels/{id}                      get, delete
/// /player-levels/{id}/complete             complete the level (POST)
///
/// /level-prizes                            list (?level_id=&prize_id=&received=&search=), create
/// /level-prizes/{id}                       get, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/players", player::router())
        .nest("/levels", level::router())
        .nest("/prizes", prize::router())
        .nest("/player-levels", player_level::router())
        .nest("/level-prizes", level_prize::router())
}
