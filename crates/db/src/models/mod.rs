pub mod dashboard;
pub mod level;
pub mod level_prize;
pub mod player;
pub mod player_level;
pub mod prize;
pub mod report;

/// Trimmed free-text filter, `None` when absent or blank.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}
