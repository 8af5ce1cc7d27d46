//! The prediction pipeline: validate, parse, decide, explain.

use placa_input::{date, plate, time, ClockTime, LicensePlate, Result, Weekday};
use placa_rules::RestrictionSchedule;
use tracing::debug;

use crate::result::Prediction;

/// Predicts circulation permissions under a restriction schedule.
///
/// Holds no per-call state; one instance can serve any number of
/// concurrent predictions.
#[derive(Debug, Clone, Default)]
pub struct Predictor {
    schedule: RestrictionSchedule,
}

impl Predictor {
    /// Creates a predictor for the given schedule. `Default` uses the
    /// Quito table.
    #[must_use]
    pub const fn new(schedule: RestrictionSchedule) -> Self {
        Self { schedule }
    }

    /// The schedule this predictor consults.
    #[must_use]
    pub const fn schedule(&self) -> &RestrictionSchedule {
        &self.schedule
    }

    /// Predicts whether the vehicle may circulate, with the full
    /// display-ready verdict.
    ///
    /// Inputs are validated plate, then date, then time; the first
    /// failure wins and later fields are never examined.
    ///
    /// # Errors
    ///
    /// Returns the first validation error, carrying the same message
    /// the field validator reports.
    pub fn predict(&self, plate_text: &str, date_text: &str, time_text: &str) -> Result<Prediction> {
        Self::validate_inputs(plate_text, date_text, time_text)?;

        let plate = LicensePlate::new(Some(plate_text))?;
        let weekday = date::weekday(Some(date_text))?;
        let clock = time::parse(Some(time_text))?;

        let restricted = self.schedule.is_restricted(plate.last_digit(), weekday, clock);
        debug!(
            plate = plate.number(),
            last_digit = plate.last_digit(),
            day = weekday.name(),
            time = %clock,
            restricted,
            "evaluated prediction"
        );

        Ok(Prediction {
            plate_number: plate.number().to_string(),
            last_digit: plate.last_digit(),
            date: date_text.to_string(),
            time: clock.to_string(),
            day_of_week: weekday.name().to_string(),
            can_drive: !restricted,
            reason: self.reason(restricted, weekday, clock),
        })
    }

    /// Boolean-only convenience wrapper around [`Self::predict`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::predict`].
    pub fn can_drive(&self, plate_text: &str, date_text: &str, time_text: &str) -> Result<bool> {
        Ok(self.predict(plate_text, date_text, time_text)?.can_drive)
    }

    /// Fail-fast ordered validation; at most one error per call.
    fn validate_inputs(plate_text: &str, date_text: &str, time_text: &str) -> Result<()> {
        if let Some(error) = plate::explain(Some(plate_text)) {
            return Err(error);
        }
        if let Some(error) = date::explain(Some(date_text)) {
            return Err(error);
        }
        if let Some(error) = time::explain(Some(time_text)) {
            return Err(error);
        }
        Ok(())
    }

    /// One of the four fixed reason templates, checked in priority
    /// order: weekend, outside the windows, digit not in the day's
    /// pair, restricted.
    fn reason(&self, restricted: bool, weekday: Weekday, clock: ClockTime) -> String {
        if weekday.is_weekend() {
            return "No Pico y Placa restrictions on weekends".to_string();
        }
        if !restricted && self.schedule.restricted_digits(weekday).is_some() {
            if !self.schedule.is_within_restricted_window(clock) {
                return "Outside restricted hours (07:00-09:30, 16:00-19:30)".to_string();
            }
            return format!("Vehicle digit not restricted on {}", weekday.name());
        }
        "Vehicle is restricted by Pico y Placa".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placa_input::{Error, Field};

    #[test]
    fn restricted_digit_in_morning_window_cannot_drive() {
        let predictor = Predictor::default();
        let prediction = predictor.predict("PBX-1001", "18/03/2024", "07:30").unwrap();
        assert!(!prediction.can_drive);
        assert_eq!(prediction.last_digit, 1);
        assert_eq!(prediction.day_of_week, "Monday");
        insta::assert_snapshot!(prediction.reason, @"Vehicle is restricted by Pico y Placa");
    }

    #[test]
    fn restricted_digit_outside_windows_can_drive() {
        let predictor = Predictor::default();
        let prediction = predictor.predict("PBX-1001", "18/03/2024", "22:00").unwrap();
        assert!(prediction.can_drive);
        insta::assert_snapshot!(prediction.reason, @"Outside restricted hours (07:00-09:30, 16:00-19:30)");
    }

    #[test]
    fn unrestricted_digit_can_drive_inside_the_window() {
        let predictor = Predictor::default();
        let prediction = predictor.predict("ABC-5555", "18/03/2024", "08:00").unwrap();
        assert!(prediction.can_drive);
        insta::assert_snapshot!(prediction.reason, @"Vehicle digit not restricted on Monday");
    }

    #[test]
    fn weekends_are_always_free() {
        let predictor = Predictor::default();
        let prediction = predictor.predict("PBX-1001", "16/03/2024", "10:00").unwrap();
        assert!(prediction.can_drive);
        assert_eq!(prediction.day_of_week, "Saturday");
        insta::assert_snapshot!(prediction.reason, @"No Pico y Placa restrictions on weekends");
    }

    #[test]
    fn nonexistent_dates_are_rejected() {
        let predictor = Predictor::default();
        let error = predictor.predict("ABC-1234", "31/02/2024", "08:00").unwrap_err();
        assert_eq!(error, Error::CalendarInvalid("31/02/2024".to_string()));
        assert!(error.to_string().contains("does not exist in the calendar"));
    }

    #[test]
    fn plate_errors_short_circuit_date_and_time() {
        let predictor = Predictor::default();
        // Date and time are also invalid here; only the plate error may
        // surface.
        let error = predictor.predict("INVALID", "99/99/9999", "99:99").unwrap_err();
        assert_eq!(error, Error::PlateFormat);
    }

    #[test]
    fn date_errors_short_circuit_time() {
        let predictor = Predictor::default();
        let error = predictor.predict("ABC-1234", "not-a-date", "99:99").unwrap_err();
        assert_eq!(error, Error::DateFormat);
        let error = predictor.predict("ABC-1234", "18/03/2024", "99:99").unwrap_err();
        assert_eq!(error, Error::TimeFormat);
    }

    #[test]
    fn empty_fields_report_the_empty_message() {
        let predictor = Predictor::default();
        assert_eq!(
            predictor.predict("", "18/03/2024", "08:00").unwrap_err(),
            Error::Empty(Field::Plate)
        );
        assert_eq!(
            predictor.predict("ABC-1234", " ", "08:00").unwrap_err(),
            Error::Empty(Field::Date)
        );
        assert_eq!(
            predictor.predict("ABC-1234", "18/03/2024", "").unwrap_err(),
            Error::Empty(Field::Time)
        );
    }

    #[test]
    fn result_echoes_the_original_date_and_normalizes_the_time() {
        let predictor = Predictor::default();
        let prediction = predictor.predict("pbx-1001", "18-03-2024", "7:30").unwrap();
        assert_eq!(prediction.plate_number, "PBX-1001");
        assert_eq!(prediction.date, "18-03-2024");
        assert_eq!(prediction.time, "07:30");
    }

    #[test]
    fn window_boundaries_flip_the_verdict_by_one_minute() {
        let predictor = Predictor::default();
        for (time, can_drive) in [
            ("06:59", true),
            ("07:00", false),
            ("09:30", false),
            ("09:31", true),
            ("15:59", true),
            ("16:00", false),
            ("19:30", false),
            ("19:31", true),
        ] {
            let verdict = predictor.can_drive("PBX-1001", "18/03/2024", time).unwrap();
            assert_eq!(verdict, can_drive, "{time}");
        }
    }

    #[test]
    fn friday_restricts_digit_zero() {
        let predictor = Predictor::default();
        // 22/03/2024 was a Friday.
        assert!(!predictor.can_drive("XYZ-1110", "22/03/2024", "08:00").unwrap());
        assert!(!predictor.can_drive("XYZ-1119", "22/03/2024", "17:00").unwrap());
        assert!(predictor.can_drive("XYZ-1111", "22/03/2024", "08:00").unwrap());
    }

    #[test]
    fn predict_is_idempotent() {
        let predictor = Predictor::default();
        let first = predictor.predict("PBX-1001", "18/03/2024", "07:30").unwrap();
        let second = predictor.predict("PBX-1001", "18/03/2024", "07:30").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_schedules_are_consulted() {
        use placa_rules::{DigitPair, RestrictionSchedule, TimeWindow};
        use placa_input::time;

        let all_day = TimeWindow {
            start: time::parse(Some("00:00")).unwrap(),
            end: time::parse(Some("23:59")).unwrap(),
        };
        let schedule = RestrictionSchedule::new(
            [None, Some(DigitPair(5, 5)), None, None, None, None, None],
            [all_day, all_day],
        );
        let predictor = Predictor::new(schedule);
        assert!(!predictor.can_drive("ABC-5555", "18/03/2024", "12:00").unwrap());
        assert!(predictor.can_drive("PBX-1001", "18/03/2024", "12:00").unwrap());
    }
}
