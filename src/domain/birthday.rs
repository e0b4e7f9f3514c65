//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Format used to parse, display and persist birthdays.
pub const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// Literal accepted (in any case) as "no birthday".
pub const ABSENT_LITERAL: &str = "none";

/// A birthday that is either absent or a real calendar date.
///
/// The parsed date is stored, never the input string.
///
/// # Example
///
/// ```
/// use contact_book::domain::Birthday;
///
/// assert!(Birthday::parse(Some("2024-02-29")).unwrap().date().is_some());
/// assert!(Birthday::parse(Some("NONE")).unwrap().is_absent());
/// assert!(Birthday::parse(Some("2023-02-30")).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Birthday(Option<NaiveDate>);

impl Birthday {
    /// A birthday with no date.
    pub fn absent() -> Self {
        Self(None)
    }

    /// A birthday on a known date.
    pub fn from_date(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    /// Parse an optional raw value.
    ///
    /// `None` and `"none"` (any case) yield an absent birthday; anything else
    /// must be a `YYYY-MM-DD` date.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if the value is not a date.
    pub fn parse(raw: Option<&str>) -> Result<Self, ValidationError> {
        match raw {
            None => Ok(Self::absent()),
            Some(value) if value.eq_ignore_ascii_case(ABSENT_LITERAL) => Ok(Self::absent()),
            Some(value) => NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
                .map(Self::from_date)
                .map_err(|_| ValidationError::InvalidBirthday(value.to_string())),
        }
    }

    /// Replace the birthday, keeping the old one if the new value is invalid.
    pub fn set(&mut self, raw: Option<&str>) -> Result<(), ValidationError> {
        *self = Self::parse(raw)?;
        Ok(())
    }

    /// The stored date, if any.
    pub fn date(&self) -> Option<NaiveDate> {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Next anniversary of this birthday on or after `today`.
    ///
    /// A Feb 29 birthday falls on Mar 1 in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        let date = self.0?;
        let this_year = anniversary(date, today.year())?;
        if this_year >= today {
            Some(this_year)
        } else {
            anniversary(date, today.year() + 1)
        }
    }

    /// Whole days from `today` until the next anniversary.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today)
            .map(|next| (next - today).num_days())
    }
}

fn anniversary(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, date.month(), date.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(BIRTHDAY_FORMAT)),
            None => write!(f, "None"),
        }
    }
}
