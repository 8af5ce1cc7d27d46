//! Placa CLI - Pico y Placa circulation predictor for Quito.
//!
//! Commands:
//! - `placa check` - One-shot prediction from arguments
//! - `placa interactive` - Prompt loop for repeated checks (the default)
//! - `placa schedule` - Print the restriction table

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "placa")]
#[command(about = "Pico y Placa circulation predictor for Quito")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict whether a vehicle may circulate
    Check {
        /// License plate (e.g., ABC-1234)
        plate: String,

        /// Date in DD/MM/YYYY or DD-MM-YYYY format
        date: String,

        /// Time in HH:MM 24-hour format
        time: String,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check vehicles interactively
    Interactive,

    /// Print the weekday digit table and restricted hours
    Schedule,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Some(Commands::Check {
            plate,
            date,
            time,
            json,
        }) => commands::check::run(&plate, &date, &time, json),
        Some(Commands::Interactive) | None => commands::interactive::run(),
        Some(Commands::Schedule) => commands::schedule::run(),
    }
}
