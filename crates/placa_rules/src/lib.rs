//! Restriction schedule and decision rules for the Pico y Placa
//! predictor.
//!
//! The schedule is a fixed mapping from weekday to a pair of restricted
//! last digits, plus two inclusive clock windows. It is built once and
//! never mutated, so concurrent readers need no locking.
//!
//! # Example
//!
//! ```rust
//! use placa_input::{time, Weekday};
//! use placa_rules::RestrictionSchedule;
//!
//! let schedule = RestrictionSchedule::quito();
//! let rush_hour = time::parse(Some("07:30")).unwrap();
//! assert!(schedule.is_restricted(1, Weekday::Monday, rush_hour));
//! assert!(!schedule.is_restricted(1, Weekday::Sunday, rush_hour));
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod schedule;

pub use schedule::{DigitPair, RestrictionSchedule, TimeWindow};
