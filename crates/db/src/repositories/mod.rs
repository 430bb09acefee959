//! Stateless repositories, one per table.

pub mod dashboard_repo;
pub mod level_prize_repo;
pub mod level_repo;
pub mod player_level_repo;
pub mod player_repo;
pub mod prize_repo;
pub mod report_repo;

pub use dashboard_repo::DashboardRepo;
pub use level_prize_repo::LevelPrizeRepo;
pub use level_repo::LevelRepo;
pub use player_level_repo::PlayerLevelRepo;
pub use player_repo::PlayerRepo;
pub use prize_repo::PrizeRepo;
pub use report_repo::ReportRepo;

/// Build an `ILIKE` pattern matching `term` anywhere, with wildcards escaped.
pub(crate) fn contains_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

#[cfg(test)]
mod tests {
    use super::contains_pattern;

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("user"), "%user%");
        assert_eq!(contains_pattern("user_0"), "%user\\_0%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
    }
}
