//! Prediction orchestrator for the Pico y Placa predictor.
//!
//! This crate ties the input layer and the rule table together:
//! fail-fast ordered validation, parsing into normalized values, the
//! restriction lookup, and assembly of the display-ready
//! [`Prediction`].
//!
//! # Example
//!
//! ```rust
//! use placa_predictor::Predictor;
//!
//! let predictor = Predictor::default();
//! let prediction = predictor.predict("PBX-1001", "18/03/2024", "07:30").unwrap();
//! assert!(!prediction.can_drive);
//! assert_eq!(prediction.day_of_week, "Monday");
//! ```

#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod predictor;
pub mod result;

pub use placa_input::{Error, Result};
pub use predictor::Predictor;
pub use result::Prediction;
