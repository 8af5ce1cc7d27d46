//! Prediction result type.

use serde::{Deserialize, Serialize};

/// Outcome of a single circulation prediction.
///
/// Field names (camelCase in serialized form) are a stable contract for
/// display layers; `date` is echoed exactly as the caller supplied it
/// while `time` is normalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Normalized uppercase plate.
    pub plate_number: String,
    /// Restriction key: final digit of the plate, 0-9.
    pub last_digit: u8,
    /// The date string exactly as supplied.
    pub date: String,
    /// Normalized `HH:MM` time.
    pub time: String,
    /// English weekday name derived from the date.
    pub day_of_week: String,
    /// True if the vehicle may circulate.
    pub can_drive: bool,
    /// Human-readable justification for the verdict.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_field_names() {
        let prediction = Prediction {
            plate_number: "PBX-1001".to_string(),
            last_digit: 1,
            date: "18/03/2024".to_string(),
            time: "07:30".to_string(),
            day_of_week: "Monday".to_string(),
            can_drive: false,
            reason: "Vehicle is restricted by Pico y Placa".to_string(),
        };
        let json = serde_json::to_string_pretty(&prediction).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "plateNumber": "PBX-1001",
          "lastDigit": 1,
          "date": "18/03/2024",
          "time": "07:30",
          "dayOfWeek": "Monday",
          "canDrive": false,
          "reason": "Vehicle is restricted by Pico y Placa"
        }
        "#);
    }

    #[test]
    fn roundtrips_through_json() {
        let prediction = Prediction {
            plate_number: "ABC-5555".to_string(),
            last_digit: 5,
            date: "18-03-2024".to_string(),
            time: "08:00".to_string(),
            day_of_week: "Monday".to_string(),
            can_drive: true,
            reason: "Vehicle digit not restricted on Monday".to_string(),
        };
        let json = serde_json::to_string(&prediction).unwrap();
        let back: Prediction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, prediction);
    }
}
