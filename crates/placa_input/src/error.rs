//! Error types for input validation and parsing.
//!
//! Message text is part of the display contract: the CLI prints
//! `Display` output verbatim as a single line, so every variant carries
//! its complete user-facing message.

use thiserror::Error;

/// Which input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// The license plate argument.
    Plate,
    /// The date argument.
    Date,
    /// The time argument.
    Time,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plate => write!(f, "License plate"),
            Self::Date => write!(f, "Date"),
            Self::Time => write!(f, "Time"),
        }
    }
}

/// Errors that can occur while validating or parsing user input.
///
/// Validators surface exactly one of these per call, chosen by strict
/// priority order; parsers reuse the same variants so the message a
/// user sees does not depend on which layer rejected the input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Input was absent entirely.
    #[error("{0} is required and must be a string")]
    Required(Field),

    /// Input was blank after trimming.
    #[error("{0} cannot be empty")]
    Empty(Field),

    /// Plate does not match the canonical `LLL-DDDD` shape.
    #[error("License plate must follow the format: ABC-1234 (3 letters, hyphen, 4 digits)")]
    PlateFormat,

    /// Plate carries no digit to key the restriction on.
    #[error("License plate must contain at least one digit")]
    PlateMissingDigit,

    /// Date does not match `DD/MM/YYYY` or `DD-MM-YYYY`.
    #[error("Date must be in format DD/MM/YYYY or DD-MM-YYYY (e.g., 15/03/2024 or 15-03-2024)")]
    DateFormat,

    /// Month field outside 1..=12.
    #[error("Month must be between 01 and 12")]
    MonthRange,

    /// Day field outside 1..=31, independent of the month's length.
    #[error("Day must be between 01 and 31")]
    DayRange,

    /// Well-formed date that does not exist on the calendar.
    #[error("Invalid date: {0} does not exist in the calendar")]
    CalendarInvalid(String),

    /// Time is malformed or out of range. The time validator does not
    /// distinguish the two cases; both collapse into this message.
    #[error("Time must be in 24-hour format HH:MM (e.g., 08:30, 17:00)")]
    TimeFormat,
}

/// Result type alias for input operations.
pub type Result<T> = std::result::Result<T, Error>;
