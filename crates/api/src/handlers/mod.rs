//! Request handlers.
//!
//! Entity submodules provide async handler functions (create, list,
//! get_by_id, update, delete) for a single table and delegate to the
//! corresponding repository in `bonuses_db`. `site`, `report` and
//! `dashboard` serve the root-level pages.

pub mod dashboard;
pub mod level;
pub mod level_prize;
pub mod player;
pub mod player_level;
pub mod prize;
pub mod report;
pub mod site;
