//! Input validation and parsing for the Pico y Placa predictor.
//!
//! This crate provides:
//! - Per-field validators that report at most one error, in a fixed
//!   priority order
//! - Parsers from raw strings into normalized value types
//! - The [`LicensePlate`], [`CalendarDate`], [`ClockTime`], and
//!   [`Weekday`] models
//!
//! Validators are non-throwing predicates (`validate` / `explain`);
//! parsers return `Result` with the same message text, so a caller that
//! validates first and parses second never sees two different stories
//! about the same input.
//!
//! # Example
//!
//! ```rust
//! use placa_input::{plate, time};
//!
//! assert!(plate::validate(Some("abc-1234")));
//! assert_eq!(time::normalize(Some("7:30")).unwrap(), "07:30");
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod date;
pub mod error;
pub mod plate;
pub mod time;
pub mod weekday;

pub use date::CalendarDate;
pub use error::{Error, Field, Result};
pub use plate::LicensePlate;
pub use time::ClockTime;
pub use weekday::Weekday;
