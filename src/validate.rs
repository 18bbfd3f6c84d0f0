//! Client-side pre-validation of a leave request.
//!
//! The backend re-validates every submission; this only turns away requests
//! that cannot possibly succeed so they never cost a round trip.

use std::fmt;

use log::{debug, trace};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::{CalendarDate, END_DATE_FIELD, HOLIDAY_YEAR_FIELD, ParseError, START_DATE_FIELD, compute_cycle};

/// Why a request was turned away.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields: {}", .fields.join(", "))]
    MissingField { fields: Vec<&'static str> },

    #[error("Invalid date format for {field} ({value:?}), expected dd/mm/yyyy: {source}")]
    InvalidDateFormat {
        field:  &'static str,
        value:  String,
        source: ParseError,
    },

    #[error("End date {end} is before start date {start}")]
    InvertedRange { start: CalendarDate, end: CalendarDate },

    #[error("Dates must fall within the holiday year {cycle_start} to {cycle_end}")]
    OutsideCycleWindow { cycle_start: String, cycle_end: String },
}

/// Category of a [`ValidationError`], without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    MissingField,
    InvalidDateFormat,
    InvertedRange,
    OutsideCycleWindow,
}

impl ValidationError {
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::MissingField { .. } => ValidationErrorKind::MissingField,
            Self::InvalidDateFormat { .. } => ValidationErrorKind::InvalidDateFormat,
            Self::InvertedRange { .. } => ValidationErrorKind::InvertedRange,
            Self::OutsideCycleWindow { .. } => ValidationErrorKind::OutsideCycleWindow,
        }
    }
}

/// A request that passed every check.
///
/// Serializes to the submission fields the backend expects, with dates
/// written back out as `dd/mm/yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ValidatedRange {
    #[serde(rename = "start_date")]
    start:        CalendarDate,
    #[serde(rename = "end_date")]
    end:          CalendarDate,
    holiday_year: i32,
}

impl ValidatedRange {
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    pub const fn holiday_year(&self) -> i32 {
        self.holiday_year
    }

    /// Calendar days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        self.start.days_until(&self.end) + 1
    }
}

impl fmt::Display for ValidatedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Checks a leave request against the holiday year it is booked in.
///
/// Checks run in order and the first failure wins:
/// 1. all three inputs are present (blank text and a zero year count as absent)
/// 2. both dates are real `dd/mm/yyyy` calendar dates
/// 3. the end is not before the start
/// 4. both dates lie inside [`compute_cycle`]`(holiday_year)`, bounds included
///
/// # Errors
/// Returns the [`ValidationError`] of the first check that fails.
pub fn validate(
    start_date: Option<&str>,
    end_date: Option<&str>,
    holiday_year: Option<i32>,
) -> Result<ValidatedRange, ValidationError> {
    let result = check(start_date, end_date, holiday_year);
    match &result {
        Ok(range) => trace!("holiday request {range} accepted for {}", range.holiday_year),
        Err(err) => debug!("holiday request rejected ({:?}): {err}", err.kind()),
    }
    result
}

fn check(
    start_date: Option<&str>,
    end_date: Option<&str>,
    holiday_year: Option<i32>,
) -> Result<ValidatedRange, ValidationError> {
    let (start_text, end_text, holiday_year) = require(start_date, end_date, holiday_year)?;

    let start = parse_field(START_DATE_FIELD, start_text)?;
    let end = parse_field(END_DATE_FIELD, end_text)?;

    if end < start {
        return Err(ValidationError::InvertedRange { start, end });
    }

    let cycle = compute_cycle(holiday_year);
    let within = cycle
        .window()
        .is_some_and(|(first, last)| first <= start && end <= last);
    if !within {
        return Err(ValidationError::OutsideCycleWindow {
            cycle_start: cycle.cycle_start().to_owned(),
            cycle_end:   cycle.cycle_end().to_owned(),
        });
    }

    Ok(ValidatedRange {
        start,
        end,
        holiday_year,
    })
}

fn present(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn require<'a>(
    start_date: Option<&'a str>,
    end_date: Option<&'a str>,
    holiday_year: Option<i32>,
) -> Result<(&'a str, &'a str, i32), ValidationError> {
    let start = present(start_date);
    let end = present(end_date);
    let year = holiday_year.filter(|y| *y != 0);

    if let (Some(start), Some(end), Some(year)) = (start, end, year) {
        return Ok((start, end, year));
    }

    let fields = [
        (START_DATE_FIELD, start.is_none()),
        (END_DATE_FIELD, end.is_none()),
        (HOLIDAY_YEAR_FIELD, year.is_none()),
    ]
    .into_iter()
    .filter_map(|(field, missing)| missing.then_some(field))
    .collect();
    Err(ValidationError::MissingField { fields })
}

fn parse_field(field: &'static str, value: &str) -> Result<CalendarDate, ValidationError> {
    value
        .parse()
        .map_err(|source| ValidationError::InvalidDateFormat {
            field,
            value: value.to_owned(),
            source,
        })
}

/// The tagged result handed back to the form: `{ok: true, start, end}` or
/// `{ok: false, kind, reason}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted {
        start: CalendarDate,
        end:   CalendarDate,
    },
    Rejected {
        kind:   ValidationErrorKind,
        reason: String,
    },
}

impl ValidationOutcome {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Accepted { .. } => None,
            Self::Rejected { reason, .. } => Some(reason.as_str()),
        }
    }
}

impl From<Result<ValidatedRange, ValidationError>> for ValidationOutcome {
    fn from(result: Result<ValidatedRange, ValidationError>) -> Self {
        match result {
            Ok(range) => Self::Accepted {
                start: range.start,
                end:   range.end,
            },
            Err(err) => Self::Rejected {
                kind:   err.kind(),
                reason: err.to_string(),
            },
        }
    }
}

impl Serialize for ValidationOutcome {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Accepted { start, end } => {
                let mut state = serializer.serialize_struct("ValidationOutcome", 3)?;
                state.serialize_field("ok", &true)?;
                state.serialize_field("start", start)?;
                state.serialize_field("end", end)?;
                state.end()
            },
            Self::Rejected { kind, reason } => {
                let mut state = serializer.serialize_struct("ValidationOutcome", 3)?;
                state.serialize_field("ok", &false)?;
                state.serialize_field("kind", kind)?;
                state.serialize_field("reason", reason)?;
                state.end()
            },
        }
    }
}
