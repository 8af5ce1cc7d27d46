//! CLI command implementations.

pub mod check;
pub mod interactive;
pub mod schedule;
