//! The weekday/digit restriction table and its time windows.

use placa_input::{ClockTime, Weekday};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An unordered pair of restricted last digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitPair(pub u8, pub u8);

impl DigitPair {
    /// True if `digit` is either member of the pair.
    #[must_use]
    pub const fn contains(self, digit: u8) -> bool {
        self.0 == digit || self.1 == digit
    }
}

/// An inclusive clock-time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First restricted minute.
    pub start: ClockTime,
    /// Last restricted minute.
    pub end: ClockTime,
}

impl TimeWindow {
    /// Inclusive on both endpoints, compared by minutes since midnight.
    #[must_use]
    pub fn contains(self, time: ClockTime) -> bool {
        time >= self.start && time <= self.end
    }
}

/// Fails compilation if the constant is out of range.
const fn clock(hours: u8, minutes: u8) -> ClockTime {
    match ClockTime::new(hours, minutes) {
        Some(time) => time,
        None => panic!("window constant out of range"),
    }
}

const MORNING: TimeWindow = TimeWindow {
    start: clock(7, 0),
    end: clock(9, 30),
};

const AFTERNOON: TimeWindow = TimeWindow {
    start: clock(16, 0),
    end: clock(19, 30),
};

/// Immutable restriction table: one optional digit pair per weekday
/// (indexed Sunday = 0) plus the restricted clock windows.
///
/// Built once at startup; `Default` is the Quito schedule. A custom
/// table can be injected for testing or other jurisdictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestrictionSchedule {
    pairs: [Option<DigitPair>; 7],
    windows: [TimeWindow; 2],
}

impl Default for RestrictionSchedule {
    fn default() -> Self {
        Self::quito()
    }
}

impl RestrictionSchedule {
    /// The standard Quito schedule: Monday {1,2}, Tuesday {3,4},
    /// Wednesday {5,6}, Thursday {7,8}, Friday {9,0}, weekends free;
    /// windows 07:00-09:30 and 16:00-19:30.
    #[must_use]
    pub const fn quito() -> Self {
        Self {
            pairs: [
                None,                  // Sunday
                Some(DigitPair(1, 2)), // Monday
                Some(DigitPair(3, 4)), // Tuesday
                Some(DigitPair(5, 6)), // Wednesday
                Some(DigitPair(7, 8)), // Thursday
                Some(DigitPair(9, 0)), // Friday
                None,                  // Saturday
            ],
            windows: [MORNING, AFTERNOON],
        }
    }

    /// Builds a custom schedule.
    #[must_use]
    pub const fn new(pairs: [Option<DigitPair>; 7], windows: [TimeWindow; 2]) -> Self {
        Self { pairs, windows }
    }

    /// The restricted digit pair for `weekday`, `None` on days without
    /// restrictions.
    #[must_use]
    pub fn restricted_digits(&self, weekday: Weekday) -> Option<DigitPair> {
        self.pairs[usize::from(weekday.index())]
    }

    /// The restricted clock windows, in chronological order.
    #[must_use]
    pub const fn windows(&self) -> &[TimeWindow; 2] {
        &self.windows
    }

    /// True if `time` falls inside either restricted window.
    #[must_use]
    pub fn is_within_restricted_window(&self, time: ClockTime) -> bool {
        self.windows.iter().any(|window| window.contains(time))
    }

    /// The core decision: may this digit not circulate at this
    /// weekday/time? Pure and idempotent; identical inputs always give
    /// identical answers.
    #[must_use]
    pub fn is_restricted(&self, last_digit: u8, weekday: Weekday, time: ClockTime) -> bool {
        let Some(pair) = self.restricted_digits(weekday) else {
            return false;
        };
        if !pair.contains(last_digit) {
            return false;
        }
        let restricted = self.is_within_restricted_window(time);
        trace!(last_digit, day = weekday.name(), %time, restricted, "rule lookup");
        restricted
    }
}
