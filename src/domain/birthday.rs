//! Birthday value object.

use super::errors::FormatError;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Display and storage format for birthdays.
pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";

/// A calendar date parsed from `DD.MM.YYYY`.
///
/// Day and month may be written with one or two digits; the year must
/// have exactly four. The date must exist in the calendar, so
/// `29.02.2001` is rejected while `29.02.2000` is accepted.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// let birthday = Birthday::parse("12.06.1990").unwrap();
/// assert_eq!(birthday.day(), 12);
/// assert_eq!(birthday.month(), 6);
/// assert_eq!(birthday.year(), 1990);
/// assert_eq!(birthday.to_string(), "12.06.1990");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday in `DD.MM.YYYY` format.
    ///
    /// # Errors
    ///
    /// Returns `FormatError::InvalidDate` on any other layout or on a date
    /// that does not exist.
    pub fn parse(input: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidDate(input.to_string());

        let mut parts = input.split('.');
        let (Some(day), Some(month), Some(year), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        let day = Self::component(day, 1..=2).ok_or_else(invalid)?;
        let month = Self::component(month, 1..=2).ok_or_else(invalid)?;
        let year = Self::component(year, 4..=4).ok_or_else(invalid)?;

        NaiveDate::from_ymd_opt(year as i32, month, day)
            .map(Self)
            .ok_or_else(invalid)
    }

    /// Parse one all-digit date component whose width falls in `width`.
    fn component(part: &str, width: std::ops::RangeInclusive<usize>) -> Option<u32> {
        if !width.contains(&part.len()) || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        part.parse().ok()
    }

    /// Wrap an already-valid calendar date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date.
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

/// Parse a raw birthday string.
///
/// Free-function form of [`Birthday::parse`].
pub fn parse_birthday(input: &str) -> Result<Birthday, FormatError> {
    Birthday::parse(input)
}

// Serde support - serialize as DD.MM.YYYY
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_string().serialize(serializer)
    }
}

// Serde support - deserialize from DD.MM.YYYY with validation
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
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}
