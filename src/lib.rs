mod consts;
mod cycle;
mod prelude;
mod request;
mod types;
mod validate;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use cycle::{HolidayCycle, compute_cycle};
pub use request::{HolidayRequest, RequestError};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
pub use validate::{ValidatedRange, ValidationError, ValidationErrorKind, ValidationOutcome, validate};

use crate::prelude::*;
use std::str::FromStr;

/// A real calendar date, written `dd/mm/yyyy` at the edges.
///
/// Dates carry no time of day, so ordering is by whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}/{:02}/{}", "day.get()", "month.get()", "year.get()")]
pub struct CalendarDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u32),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u32),
    #[display(fmt = "Invalid day {day} for month {month:02}/{year}")]
    InvalidDay { day: u32, month: u8, year: u16 },
    #[display(fmt = "Date {day:02}/{month:02}/{year} does not exist")]
    NonexistentDate { day: u32, month: u32, year: u32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date from already validated parts, checking the day exists in that month.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the month is shorter than `day`.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, ParseError> {
        let day = Day::in_month(day.get(), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Builds a date from raw numeric components.
    ///
    /// The components are first normalized the way a lenient calendar would
    /// (month 13 becomes January of the next year, 31 February becomes early
    /// March) and the result must reproduce the input exactly.
    ///
    /// # Errors
    /// Returns `ParseError::NonexistentDate` when normalization moves the date,
    /// and `InvalidYear`/`InvalidMonth`/`InvalidDay` for zero or out-of-range parts.
    pub fn from_components(year: u32, month: u32, day: u32) -> Result<Self, ParseError> {
        let year16 = u16::try_from(year)
            .ok()
            .filter(|y| (1..=MAX_YEAR).contains(y))
            .ok_or(ParseError::InvalidYear(year))?;
        if month == 0 {
            return Err(ParseError::InvalidMonth(month));
        }
        if day == 0 {
            return Err(ParseError::InvalidDay { day, month: 0, year: year16 });
        }

        let nonexistent = ParseError::NonexistentDate { day, month, year };
        let (norm_year, norm_month, norm_day) = roll_over(year16, month, day).ok_or_else(|| nonexistent.clone())?;
        if (u32::from(norm_year), u32::from(norm_month), u32::from(norm_day)) != (year, month, day) {
            return Err(nonexistent);
        }

        let year = Year::new(norm_year)?;
        let month = Month::new(norm_month)?;
        let day = Day::in_month(norm_day, year, month)?;
        Ok(Self { year, month, day })
    }

    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    pub const fn year_typed(&self) -> Year {
        self.year
    }

    pub const fn month_typed(&self) -> Month {
        self.month
    }

    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Ordinal day count since 01/01/1 (which is day 1).
    pub fn day_number(&self) -> i64 {
        types::day_number(self.year(), self.month(), self.day())
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    fn parse_component(s: &str) -> Result<u32, ParseError> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

// --- lenient normalization ---
fn next_month(year: u64, month: u8) -> (u64, u8) {
    if month >= MAX_MONTH {
        (year + 1, JANUARY)
    } else {
        (year, month + 1)
    }
}

/// Normalizes `day/month/year`, carrying month and day overflow forward.
/// Returns `None` once the result would pass `MAX_YEAR`.
fn roll_over(year: u16, month: u32, day: u32) -> Option<(u16, u8, u8)> {
    let months = u64::from(month).checked_sub(1)?;
    let mut year = u64::from(year) + months / u64::from(MAX_MONTH);
    let mut month = u8::try_from(months % u64::from(MAX_MONTH)).ok()? + 1;
    let mut day = u64::from(day);

    loop {
        let current_year = u16::try_from(year).ok().filter(|y| *y <= MAX_YEAR)?;
        let length = u64::from(days_in_month(current_year, month));
        if day <= length {
            return Some((current_year, month, u8::try_from(day).ok()?));
        }
        day -= length;
        (year, month) = next_month(year, month);
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "expected 2 '{DATE_SEPARATOR}' separators, found {}: {trimmed}",
                parts.len() - 1
            )));
        };

        let day = Self::parse_component(day)?;
        let month = Self::parse_component(month)?;
        let year = Self::parse_component(year)?;
        Self::from_components(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
