use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

/// A simple clock abstraction for deterministic wall-clock time in services and tests.
///
/// Greetings are chosen from the local hour, so the clock reports naive local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    #[default]
    Default,
    Fixed(NaiveDateTime),
}

impl Clock {
    /// Returns a clock that uses the current local time.
    #[must_use]
    pub fn default_clock() -> Self {
        Self::Default
    }

    /// Returns a clock fixed at the given local timestamp.
    #[must_use]
    pub fn fixed(at: NaiveDateTime) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current local time according to the clock.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::Default => Local::now().naive_local(),
            Clock::Fixed(t) => *t,
        }
    }

    /// Hour of day (0-23) according to the clock.
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.now().hour()
    }
}

/// Whole milliseconds in `duration`, saturating at `u64::MAX`.
#[must_use]
pub fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Returns a deterministic morning timestamp (2024-06-03 09:00) for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_morning() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 3)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("fixed timestamp should be valid")
}

/// Returns a `Clock` fixed at the given hour of the deterministic test day.
///
/// # Panics
///
/// Panics if `hour` is not a valid hour of day.
#[must_use]
pub fn fixed_clock_at(hour: u32) -> Clock {
    let at = fixed_morning()
        .with_hour(hour)
        .expect("hour should be within 0..24");
    Clock::fixed(at)
}
