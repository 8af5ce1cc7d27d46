//! Check command implementation.

use std::fmt::Write;

use anyhow::Result;
use placa_predictor::{Prediction, Predictor};
use tracing::debug;

/// Runs the check command.
pub fn run(plate: &str, date: &str, time: &str, json: bool) -> Result<()> {
    debug!(plate, date, time, "running one-shot prediction");

    let predictor = Predictor::default();
    let prediction = predictor.predict(plate, date, time)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&prediction)?);
    } else {
        print!("{}", render(&prediction));
    }
    Ok(())
}

/// Renders the prediction as a plain text block.
pub(crate) fn render(prediction: &Prediction) -> String {
    let status = if prediction.can_drive {
        "CAN DRIVE"
    } else {
        "CANNOT DRIVE"
    };

    let mut out = String::new();
    let _ = writeln!(out, "License plate:  {}", prediction.plate_number);
    let _ = writeln!(out, "Last digit:     {}", prediction.last_digit);
    let _ = writeln!(out, "Date:           {} ({})", prediction.date, prediction.day_of_week);
    let _ = writeln!(out, "Time:           {}", prediction.time);
    let _ = writeln!(out, "Status:         {status}");
    let _ = writeln!(out, "Reason:         {}", prediction.reason);
    out
}
