//! Date validation, parsing, and the calendar-date model.
//!
//! Accepted shapes are `DD/MM/YYYY` and `DD-MM-YYYY`. Each separator
//! position accepts either character independently, so a mixed input
//! like `18/03-2024` passes the shape check; the calendar check is what
//! decides whether the date exists.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Field, Result};
use crate::weekday::Weekday;

/// A calendar-valid Gregorian date with its derived weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    /// Day of month, 1-31.
    pub day: u32,
    /// Month, 1-12.
    pub month: u32,
    /// Four-digit year.
    pub year: i32,
    /// Weekday derived from the date.
    pub weekday: Weekday,
}

/// Day/month/year fields captured from the shape match, before any
/// range or calendar checking.
struct RawDate {
    day: u32,
    month: u32,
    year: i32,
}

/// Returns true if `input` is a well-formed, calendar-valid date.
pub fn validate(input: Option<&str>) -> bool {
    explain(input).is_none()
}

/// Explains why `input` is not a valid date, or `None` if it is.
///
/// At most one error is reported, in priority order: absent, blank,
/// shape mismatch, month out of range, day out of range, date not on
/// the calendar. The day range check is month-independent; `31/04` gets
/// past it and is rejected by the calendar check instead.
pub fn explain(input: Option<&str>) -> Option<Error> {
    let Some(raw) = input else {
        return Some(Error::Required(Field::Date));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Error::Empty(Field::Date));
    }
    let Some(fields) = match_shape(trimmed) else {
        return Some(Error::DateFormat);
    };
    if !(1..=12).contains(&fields.month) {
        return Some(Error::MonthRange);
    }
    if !(1..=31).contains(&fields.day) {
        return Some(Error::DayRange);
    }
    if NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day).is_none() {
        return Some(Error::CalendarInvalid(trimmed.to_string()));
    }
    None
}

/// Parses `DD/MM/YYYY` or `DD-MM-YYYY` into a [`CalendarDate`].
///
/// # Errors
///
/// Fails on absent or blank input, shape mismatch, or a date that does
/// not exist on the calendar (the latter message includes the offending
/// input). Out-of-range day/month fields roll into the calendar error
/// here; only the validator distinguishes them.
pub fn parse(input: Option<&str>) -> Result<CalendarDate> {
    let Some(raw) = input else {
        return Err(Error::Required(Field::Date));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::Empty(Field::Date));
    }
    let fields = match_shape(trimmed).ok_or(Error::DateFormat)?;
    let date = NaiveDate::from_ymd_opt(fields.year, fields.month, fields.day)
        .ok_or_else(|| Error::CalendarInvalid(trimmed.to_string()))?;
    let weekday = Weekday::from_chrono(date.weekday());
    trace!(%date, day = weekday.name(), "parsed calendar date");
    Ok(CalendarDate {
        day: fields.day,
        month: fields.month,
        year: fields.year,
        weekday,
    })
}

/// Weekday for a date string, Sunday = 0.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn weekday(input: Option<&str>) -> Result<Weekday> {
    Ok(parse(input)?.weekday)
}

/// Renders a date string as e.g. `Monday, March 18, 2024`.
///
/// # Errors
///
/// Same failure modes as [`parse`].
pub fn format_long(input: Option<&str>) -> Result<String> {
    let date = parse(input)?;
    Ok(format!(
        "{}, {} {}, {}",
        date.weekday.name(),
        month_name(date.month),
        date.day,
        date.year
    ))
}

/// Matches `DD<sep>MM<sep>YYYY` with each separator independently `/`
/// or `-`. Returns the numeric fields without judging their ranges.
fn match_shape(candidate: &str) -> Option<RawDate> {
    let bytes = candidate.as_bytes();
    if bytes.len() != 10 || !is_separator(bytes[2]) || !is_separator(bytes[5]) {
        return None;
    }
    let day = parse_digits(&candidate[0..2])?;
    let month = parse_digits(&candidate[3..5])?;
    let year = i32::try_from(parse_digits(&candidate[6..10])?).ok()?;
    Some(RawDate { day, month, year })
}

const fn is_separator(byte: u8) -> bool {
    matches!(byte, b'/' | b'-')
}

/// Parses a field of ASCII digits; rejects signs and whitespace that
/// `str::parse` would otherwise tolerate.
fn parse_digits(field: &str) -> Option<u32> {
    if field.bytes().all(|byte| byte.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

/// English month name, 1-indexed.
const fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}
