//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Textual format birthdays are entered and displayed in.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

// chrono alone accepts unpadded fields, so the shape is checked first.
static BIRTHDAY_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile birthday regex")
});

/// A validated birthday in `DD.MM.YYYY` form.
///
/// The text the user typed is kept as-is for display, alongside the parsed
/// calendar date used by the upcoming-birthday query.
///
/// # Example
///
/// ```
/// use contact_assistant::domain::Birthday;
///
/// let birthday = Birthday::new("01.01.2000").unwrap();
/// assert_eq!(birthday.as_str(), "01.01.2000");
/// assert!(Birthday::new("31.02.2000").is_err());
/// assert!(Birthday::new("1.1.2000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    raw: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday, validating shape and calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the input is not two
    /// digits, a dot, two digits, a dot and four digits, or if it names a
    /// day that does not exist.
    pub fn new(birthday: impl Into<String>) -> Result<Self, ValidationError> {
        let raw = birthday.into();

        if !BIRTHDAY_SHAPE.is_match(&raw) {
            return Err(ValidationError::InvalidBirthday(raw));
        }

        match NaiveDate::parse_from_str(&raw, BIRTHDAY_FORMAT) {
            Ok(date) => Ok(Self { raw, date }),
            Err(_) => Err(ValidationError::InvalidBirthday(raw)),
        }
    }

    /// Get the birthday exactly as it was entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The parsed calendar date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// This birthday's day and month in the given year.
    ///
    /// 29 February falls on 28 February in non-leap years. Returns `None`
    /// only when `year` is outside the range chrono can represent.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day()).or_else(|| {
            if self.date.month() == 2 && self.date.day() == 29 {
                NaiveDate::from_ymd_opt(year, 2, 28)
            } else {
                None
            }
        })
    }

    /// The first celebration on or after `reference`.
    ///
    /// Projects onto the reference year, moving to the following year when
    /// that day has already passed.
    pub fn next_occurrence(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let this_year = self.in_year(reference.year())?;
        if this_year < reference {
            self.in_year(reference.year() + 1)
        } else {
            Some(this_year)
        }
    }

    /// Whole days from `reference` until the next celebration.
    pub fn days_until(&self, reference: NaiveDate) -> Option<i64> {
        self.next_occurrence(reference)
            .map(|next| (next - reference).num_days())
    }
}

// Serde support - serialize as the entered text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.raw.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_valid() {
        let birthday = Birthday::new("01.01.2000").unwrap();
        assert_eq!(birthday.as_str(), "01.01.2000");
        assert_eq!(birthday.date(), date(2000, 1, 1));
    }

    #[test]
    fn test_birthday_rejects_bad_shapes() {
        for input in [
            "1.1.2000",
            "01-01-2000",
            "2000.01.01",
            "01.01.00",
            "01.01.20000",
            " 01.01.2000",
            "01.01.2000 ",
            "aa.bb.cccc",
            "",
        ] {
            assert!(Birthday::new(input).is_err(), "{input:?} should be rejected");
        }
    }

    #[test]
    fn test_birthday_rejects_impossible_dates() {
        assert!(Birthday::new("31.02.2000").is_err());
        assert!(Birthday::new("29.02.2001").is_err());
        assert!(Birthday::new("00.01.2000").is_err());
        assert!(Birthday::new("15.13.2000").is_err());
        assert!(Birthday::new("29.02.2000").is_ok());
    }

    #[test]
    fn test_birthday_error_keeps_input() {
        let err = Birthday::new("31.02.2000").unwrap_err();
        assert_eq!(err, ValidationError::InvalidBirthday("31.02.2000".into()));
    }

    #[test]
    fn test_next_occurrence_same_year() {
        let birthday = Birthday::new("12.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 10)),
            Some(date(2024, 6, 12))
        );
    }

    #[test]
    fn test_next_occurrence_today_stays() {
        let birthday = Birthday::new("10.06.1990").unwrap();
        assert_eq!(birthday.days_until(date(2024, 6, 10)), Some(0));
    }

    #[test]
    fn test_next_occurrence_rolls_over() {
        let birthday = Birthday::new("05.06.1990").unwrap();
        assert_eq!(
            birthday.next_occurrence(date(2024, 6, 10)),
            Some(date(2025, 6, 5))
        );
    }

    #[test]
    fn test_leap_day_clamped_in_common_year() {
        let birthday = Birthday::new("29.02.2000").unwrap();
        assert_eq!(birthday.in_year(2025), Some(date(2025, 2, 28)));
        assert_eq!(birthday.in_year(2028), Some(date(2028, 2, 29)));
    }

    #[test]
    fn test_display_round_trip() {
        let birthday = Birthday::new("07.11.1985").unwrap();
        let again = Birthday::new(birthday.to_string()).unwrap();
        assert_eq!(birthday, again);
    }

    #[test]
    fn test_birthday_serialization() {
        let birthday = Birthday::new("07.11.1985").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"07.11.1985\"");
        let invalid: Result<Birthday, _> = serde_json::from_str("\"7.11.1985\"");
        assert!(invalid.is_err());
    }
}
