//! Schedule command implementation.

use anyhow::Result;
use placa_input::Weekday;
use placa_rules::RestrictionSchedule;

/// Prints the restriction table, Monday first.
pub fn run() -> Result<()> {
    let schedule = RestrictionSchedule::quito();

    let display_order = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    println!("Quito Pico y Placa schedule");
    println!();
    for weekday in display_order {
        match schedule.restricted_digits(weekday) {
            Some(pair) => println!("  {:<10} digits {} and {}", weekday.name(), pair.0, pair.1),
            None => println!("  {:<10} no restriction", weekday.name()),
        }
    }
    println!();
    let [morning, afternoon] = schedule.windows();
    println!(
        "Restricted hours: {}-{} and {}-{}",
        morning.start, morning.end, afternoon.start, afternoon.end
    );
    Ok(())
}
