//! Interactive prompt loop.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use placa_predictor::Predictor;

use super::check;

/// Runs the interactive mode until the user exits or stdin closes.
pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let predictor = Predictor::default();

    println!("Pico y Placa Predictor - interactive mode");
    println!("Type 'exit' or 'quit' at the plate prompt to leave.");
    println!();

    loop {
        let Some(plate) = prompt(&mut lines, "Enter license plate (e.g., ABC-1234): ")? else {
            break;
        };
        if matches!(plate.to_lowercase().as_str(), "exit" | "quit") {
            break;
        }
        let Some(date) = prompt(&mut lines, "Enter date (DD/MM/YYYY or DD-MM-YYYY): ")? else {
            break;
        };
        let Some(time) = prompt(&mut lines, "Enter time (HH:MM in 24-hour format): ")? else {
            break;
        };

        println!();
        match predictor.predict(&plate, &date, &time) {
            Ok(prediction) => print!("{}", check::render(&prediction)),
            Err(error) => println!("Error: {error}"),
        }
        println!();

        let Some(answer) = prompt(&mut lines, "Check another vehicle? (yes/no): ")? else {
            break;
        };
        if !matches!(answer.to_lowercase().as_str(), "yes" | "y") {
            break;
        }
        println!();
    }

    println!("Goodbye!");
    Ok(())
}

/// Prints a prompt and reads one trimmed line; `None` once stdin is
/// exhausted.
fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    message: &str,
) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush().context("failed to flush stdout")?;
    match lines.next() {
        Some(line) => Ok(Some(line.context("failed to read stdin")?.trim().to_string())),
        None => Ok(None),
    }
}
