//! License plate validation and the normalized plate model.
//!
//! The shape validator enforces the canonical Ecuadorian format
//! (`ABC-1234`). The [`LicensePlate`] model deliberately does not: its
//! digit extraction scans the whole normalized string and takes the
//! final digit, so it works for any input carrying at least one digit.
//! The two layers stay decoupled; constructing a plate never re-runs
//! the shape check.

use crate::error::{Error, Field, Result};

/// Returns true if `input` is a well-formed plate.
///
/// Case-insensitive and whitespace-trimmed; `None` and blank strings
/// are invalid.
pub fn validate(input: Option<&str>) -> bool {
    explain(input).is_none()
}

/// Explains why `input` is not a well-formed plate, or `None` if it is.
///
/// At most one error is reported, checked in priority order: absent,
/// blank after trim, bad shape.
pub fn explain(input: Option<&str>) -> Option<Error> {
    let Some(raw) = input else {
        return Some(Error::Required(Field::Plate));
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Some(Error::Empty(Field::Plate));
    }
    if has_plate_shape(&trimmed.to_uppercase()) {
        None
    } else {
        Some(Error::PlateFormat)
    }
}

/// Canonical shape: 3 ASCII letters, a hyphen, 4 digits.
fn has_plate_shape(candidate: &str) -> bool {
    let bytes = candidate.as_bytes();
    bytes.len() == 8
        && bytes[..3].iter().all(u8::is_ascii_uppercase)
        && bytes[3] == b'-'
        && bytes[4..].iter().all(u8::is_ascii_digit)
}

/// A normalized license plate and its restriction key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LicensePlate {
    number: String,
    last_digit: u8,
}

impl LicensePlate {
    /// Builds a normalized (trimmed, uppercase) plate from raw input
    /// and extracts its last digit.
    ///
    /// # Errors
    ///
    /// Fails if the input is absent, blank, or contains no digit.
    pub fn new(input: Option<&str>) -> Result<Self> {
        let Some(raw) = input else {
            return Err(Error::Required(Field::Plate));
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(Error::Empty(Field::Plate));
        }
        let number = trimmed.to_uppercase();
        let last_digit = number
            .bytes()
            .rev()
            .find(u8::is_ascii_digit)
            .map(|byte| byte - b'0')
            .ok_or(Error::PlateMissingDigit)?;
        Ok(Self { number, last_digit })
    }

    /// The normalized plate string.
    #[must_use]
    pub fn number(&self) -> &str {
        &self.number
    }

    /// Final digit of the plate, 0-9.
    #[must_use]
    pub const fn last_digit(&self) -> u8 {
        self.last_digit
    }
}

impl std::fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_canonical_plates() {
        assert!(validate(Some("ABC-1234")));
        assert!(validate(Some("PBX-5678")));
    }

    #[test]
    fn is_case_insensitive_and_trims() {
        assert!(validate(Some("abc-1234")));
        assert!(validate(Some("  PBX-1001  ")));
    }

    #[test]
    fn rejects_wrong_shapes() {
        for bad in ["AB-1234", "ABCD-1234", "ABC-123", "ABC-12345", "ABC1234", "ABC_1234", "123-ABCD"] {
            assert_eq!(explain(Some(bad)), Some(Error::PlateFormat), "{bad}");
        }
    }

    #[test]
    fn error_priority_is_absent_then_empty_then_format() {
        assert_eq!(explain(None), Some(Error::Required(Field::Plate)));
        assert_eq!(explain(Some("   ")), Some(Error::Empty(Field::Plate)));
        assert_eq!(explain(Some("nope")), Some(Error::PlateFormat));
    }

    #[test]
    fn plate_normalizes_and_extracts_last_digit() {
        let plate = LicensePlate::new(Some("  pbx-1001 ")).unwrap();
        assert_eq!(plate.number(), "PBX-1001");
        assert_eq!(plate.last_digit(), 1);
    }

    #[test]
    fn extraction_is_format_agnostic() {
        // Shape validation would reject these, but the model only needs
        // a digit somewhere in the string.
        let plate = LicensePlate::new(Some("X9")).unwrap();
        assert_eq!(plate.last_digit(), 9);
        let plate = LicensePlate::new(Some("A1B2C3")).unwrap();
        assert_eq!(plate.last_digit(), 3);
    }

    #[test]
    fn plate_without_digits_is_rejected() {
        assert_eq!(LicensePlate::new(Some("ABCDEF")), Err(Error::PlateMissingDigit));
        assert_eq!(LicensePlate::new(None), Err(Error::Required(Field::Plate)));
        assert_eq!(LicensePlate::new(Some(" ")), Err(Error::Empty(Field::Plate)));
    }

    #[test]
    fn trailing_letters_do_not_hide_the_digit() {
        let plate = LicensePlate::new(Some("ABC-1230X")).unwrap();
        assert_eq!(plate.last_digit(), 0);
    }
}
