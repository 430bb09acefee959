//! Level completion rules.
//!
//! Completing a player level records a score and a completion date, and
//! stamps every prize bound to the level with that same date. The database
//! side lives in `PlayerLevelRepo::complete`; this module decides the values
//! written.

use crate::clock::Clock;
use crate::error::CoreError;
use crate::types::CalendarDate;

/// Score recorded when the caller does not supply one.
pub const DEFAULT_SCORE: i32 = 0;

/// Values written by a single completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionStamp {
    pub completed_on: CalendarDate,
    pub score: i32,
}

impl CompletionStamp {
    /// Build a stamp for "today" according to `clock`.
    ///
    /// Fails with [`CoreError::Validation`] if the score is negative or does
    /// not fit the `INTEGER` score column.
    pub fn new(clock: &dyn Clock, score: Option<i64>) -> Result<Self, CoreError> {
        Ok(Self {
            completed_on: clock.today(),
            score: validate_score(score)?,
        })
    }
}

/// Resolve an optional requested score into the stored value.
pub fn validate_score(score: Option<i64>) -> Result<i32, CoreError> {
    let Some(score) = score else {
        return Ok(DEFAULT_SCORE);
    };
    if score < 0 {
        return Err(CoreError::Validation(format!(
            "score must be non-negative (got {score})"
        )));
    }
    i32::try_from(score).map_err(|_| {
        CoreError::Validation(format!(
            "score must be at most {} (got {score})",
            i32::MAX
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use assert_matches::assert_matches;

    #[test]
    fn missing_score_defaults_to_zero() {
        assert_eq!(validate_score(None).unwrap(), 0);
    }

    #[test]
    fn zero_and_positive_scores_accepted() {
        assert_eq!(validate_score(Some(0)).unwrap(), 0);
        assert_eq!(validate_score(Some(100)).unwrap(), 100);
        assert_eq!(validate_score(Some(i64::from(i32::MAX))).unwrap(), i32::MAX);
    }

    #[test]
    fn negative_score_rejected() {
        assert_matches!(validate_score(Some(-1)), Err(CoreError::Validation(_)));
    }

    #[test]
    fn overflowing_score_rejected() {
        assert_matches!(
            validate_score(Some(i64::from(i32::MAX) + 1)),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn stamp_uses_clock_date() {
        let date = CalendarDate::from_ymd_opt(2024, 5, 1).unwrap();
        let stamp = CompletionStamp::new(&FixedClock(date), Some(100)).unwrap();
        assert_eq!(
            stamp,
            CompletionStamp {
                completed_on: date,
                score: 100
            }
        );
    }
}
