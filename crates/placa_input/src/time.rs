//! Time validation, parsing, and minute arithmetic.
//!
//! Accepted shapes are `H:MM` and `HH:MM`, 24-hour. Minutes are always
//! two digits; an out-of-range hour and a malformed string both get the
//! single generic format message (unlike dates, where ranges have their
//! own messages).

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Field, Result};

/// A 24-hour wall-clock time. Ordering follows minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClockTime {
    hours: u8,
    minutes: u8,
}

impl ClockTime {
    /// Builds a clock time; `None` if either field is out of range.
    #[must_use]
    pub const fn new(hours: u8, minutes: u8) -> Option<Self> {
        if hours <= 23 && minutes <= 59 {
            Some(Self { hours, minutes })
        } else {
            None
        }
    }

    /// Builds a clock time from minutes since midnight, `None` past
    /// 23:59.
    #[must_use]
    pub fn from_minutes(total: u16) -> Option<Self> {
        let hours = u8::try_from(total / 60).ok()?;
        let minutes = u8::try_from(total % 60).ok()?;
        Self::new(hours, minutes)
    }

    /// Hour, 0-23.
    #[must_use]
    pub const fn hours(self) -> u8 {
        self.hours
    }

    /// Minute, 0-59.
    #[must_use]
    pub const fn minutes(self) -> u8 {
        self.minutes
    }

    /// Minutes since midnight, 0-1439. Used for all range comparisons.
    #[must_use]
    pub fn minutes_since_midnight(self) -> u16 {
        u16::from(self.hours) * 60 + u16::from(self.minutes)
    }
}

impl std::fmt::Display for ClockTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hours, self.minutes)
    }
}

/// Returns true if `input` is a well-formed 24-hour time.
pub fn validate(input: Option<&str>) -> bool {
    explain(input).is_none()
}

/// Explains why `input` is not a valid time, or `None` if it is.
///
/// Priority order: absent, blank after trim, then the one generic
/// format message for everything else.
pub fn explain(input: Option<&str>) -> Option<Error> {
    let Some(raw) = input else {
        return Some(Error::Required(Field::Time));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Error::Empty(Field::Time));
    }
    if match_shape(trimmed).is_none() {
        return Some(Error::TimeFormat);
    }
    None
}

/// Parses `H:MM` or `HH:MM` into a [`ClockTime`].
///
/// # Errors
///
/// Fails on absent or blank input, or any shape/range mismatch.
pub fn parse(input: Option<&str>) -> Result<ClockTime> {
    let Some(raw) = input else {
        return Err(Error::Required(Field::Time));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Empty(Field::Time));
    }
    match_shape(trimmed).ok_or(Error::TimeFormat)
}

/// Total minutes since midnight for a time string.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn to_minutes(input: Option<&str>) -> Result<u16> {
    Ok(parse(input)?.minutes_since_midnight())
}

/// Normalizes a time string to zero-padded `HH:MM`.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn normalize(input: Option<&str>) -> Result<String> {
    Ok(parse(input)?.to_string())
}

/// Three-way comparison of two time strings by minute value.
///
/// # Errors
///
/// Same failure modes as [`parse`], first argument checked first.
pub fn compare(first: Option<&str>, second: Option<&str>) -> Result<Ordering> {
    let first = parse(first)?;
    let second = parse(second)?;
    Ok(first.cmp(&second))
}

/// Inclusive range check on minute values. Callers supply
/// `start <= end`; behavior for an inverted range is unspecified.
///
/// # Errors
///
/// Same failure modes as [`parse`] for any of the three arguments.
pub fn is_between(time: Option<&str>, start: Option<&str>, end: Option<&str>) -> Result<bool> {
    let time = to_minutes(time)?;
    Ok(time >= to_minutes(start)? && time <= to_minutes(end)?)
}

/// Matches `H:MM` or `HH:MM` and range-checks both fields in one step.
fn match_shape(candidate: &str) -> Option<ClockTime> {
    let (hour_part, minute_part) = candidate.split_once(':')?;
    if hour_part.is_empty() || hour_part.len() > 2 || minute_part.len() != 2 {
        return None;
    }
    if !all_digits(hour_part) || !all_digits(minute_part) {
        return None;
    }
    ClockTime::new(hour_part.parse().ok()?, minute_part.parse().ok()?)
}

fn all_digits(field: &str) -> bool {
    field.bytes().all(|byte| byte.is_ascii_digit())
}
