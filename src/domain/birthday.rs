//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Display and storage format for birthdays.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// Year 0 exists in chrono's proleptic calendar but is not a valid birthday year.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

// chrono accepts unpadded fields for %d/%m, so the exact shape is checked first.
static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").unwrap());

/// A birthday stored as a normalized `DD.MM.YYYY` string.
///
/// Construct it from text with [`Birthday::parse`] (or `str::parse`) or from
/// a calendar date with [`Birthday::from_date`]. Either way the stored value
/// is the `DD.MM.YYYY` rendering of a real calendar date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
/// use chrono::NaiveDate;
///
/// let parsed: Birthday = "15.06.1990".parse().unwrap();
/// assert_eq!(parsed.as_str(), "15.06.1990");
///
/// let from_date = Birthday::from_date(NaiveDate::from_ymd_opt(1990, 6, 5).unwrap()).unwrap();
/// assert_eq!(from_date.as_str(), "05.06.1990");
///
/// assert!("30.02.2024".parse::<Birthday>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday(String);

impl Birthday {
    /// Parse a `DD.MM.YYYY` string.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` if the text does not have the
    /// exact shape or does not name a real calendar date.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::parse_date(value)
            .map(|_| Self(value.to_string()))
            .ok_or_else(|| ValidationError::InvalidDate(value.to_string()))
    }

    /// Build a birthday from a calendar date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDate` for years outside 1-9999.
    pub fn from_date(date: NaiveDate) -> Result<Self, ValidationError> {
        let formatted = date.format(DATE_FORMAT).to_string();
        if !(MIN_YEAR..=MAX_YEAR).contains(&date.year()) {
            return Err(ValidationError::InvalidDate(formatted));
        }
        Ok(Self(formatted))
    }

    /// The calendar date this birthday names.
    ///
    /// Returns `None` if the stored text cannot be read back as a date.
    pub fn date(&self) -> Option<NaiveDate> {
        Self::parse_date(&self.0)
    }

    /// Get the birthday as a `DD.MM.YYYY` string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    fn parse_date(value: &str) -> Option<NaiveDate> {
        if !DATE_SHAPE_RE.is_match(value) {
            return None;
        }
        NaiveDate::parse_from_str(value, DATE_FORMAT)
            .ok()
            .filter(|date| date.year() >= MIN_YEAR)
    }
}

impl FromStr for Birthday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Birthday {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<NaiveDate> for Birthday {
    type Error = ValidationError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(value)
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_birthday_keeps_valid_string() {
        for s in ["15.06.1990", "29.02.2000", "01.01.0001", "31.12.9999"] {
            assert_eq!(Birthday::parse(s).unwrap().as_str(), s);
        }
    }

    #[test]
    fn test_birthday_rejects_invalid_strings() {
        for s in [
            "30.02.2024",
            "29.02.2023",
            "",
            "2024-02-30",
            "2024-02-10",
            "1.6.1990",
            "15/06/1990",
            "15.06.90",
            "15.13.1990",
            " 15.06.1990",
            "15.06.1990 ",
            "01.01.0000",
            "29.02.0000",
            "１５.06.1990",
        ] {
            assert_eq!(
                Birthday::parse(s),
                Err(ValidationError::InvalidDate(s.to_string())),
                "expected {s:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_birthday_from_date_normalizes() {
        let date = NaiveDate::from_ymd_opt(2001, 3, 7).unwrap();
        let birthday = Birthday::from_date(date).unwrap();
        assert_eq!(birthday.as_str(), "07.03.2001");
        assert_eq!(birthday.date(), Some(date));
    }

    #[test]
    fn test_birthday_from_date_rejects_five_digit_year() {
        let date = NaiveDate::from_ymd_opt(10000, 1, 1).unwrap();
        assert!(Birthday::from_date(date).is_err());
    }

    #[test]
    fn test_birthday_from_date_rejects_year_zero() {
        let date = NaiveDate::from_ymd_opt(0, 3, 1).unwrap();
        assert_eq!(
            Birthday::from_date(date),
            Err(ValidationError::InvalidDate("01.03.0000".to_string()))
        );
        assert!(Birthday::from_date(NaiveDate::from_ymd_opt(1, 3, 1).unwrap()).is_ok());
    }

    #[test]
    fn test_birthday_date_unreadable_is_none() {
        let birthday = Birthday("31.02.2024".to_string());
        assert_eq!(birthday.date(), None);
    }

    #[test]
    fn test_birthday_conversions() {
        let from_str: Birthday = "10.10.2010".parse().unwrap();
        let from_owned = Birthday::try_from("10.10.2010".to_string()).unwrap();
        let from_date =
            Birthday::try_from(NaiveDate::from_ymd_opt(2010, 10, 10).unwrap()).unwrap();
        assert_eq!(from_str, from_owned);
        assert_eq!(from_owned, from_date);
    }

    #[test]
    fn test_birthday_display() {
        let birthday = Birthday::parse("05.11.1985").unwrap();
        assert_eq!(format!("{}", birthday), "05.11.1985");
    }

    #[test]
    fn test_birthday_serde() {
        let birthday = Birthday::parse("05.11.1985").unwrap();
        assert_eq!(serde_json::to_string(&birthday).unwrap(), "\"05.11.1985\"");

        let back: Birthday = serde_json::from_str("\"05.11.1985\"").unwrap();
        assert_eq!(back, birthday);

        let result: Result<Birthday, _> = serde_json::from_str("\"1985-11-05\"");
        assert!(result.is_err());
    }
}
