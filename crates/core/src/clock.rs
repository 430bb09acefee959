//! Source of the current calendar date.
//!
//! Level completion stamps the player level and every bound prize with
//! "today". Handlers receive the date from a [`Clock`] held in application
//! state so tests can pin it with [`FixedClock`].

use crate::types::CalendarDate;

/// Provides the current date for completion stamping.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}

/// Wall-clock implementation (UTC date).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        chrono::Utc::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
