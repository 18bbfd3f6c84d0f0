use serde::{Deserialize, Serialize};

use crate::{ValidatedRange, ValidationError, validate};

/// A leave request as submitted by the form.
///
/// The backend is unversioned and several field spellings are in use, so
/// deserialization resolves each field from a fixed list of names and takes
/// the first one that is present and not blank:
///
/// | field          | accepted names, in order                         |
/// |----------------|--------------------------------------------------|
/// | `start_date`   | `start_date`, `startDate`, `start`, `from_date`  |
/// | `end_date`     | `end_date`, `endDate`, `end`, `to_date`          |
/// | `holiday_year` | `holiday_year`, `holidayYear`, `year`            |
///
/// The holiday year may be a number or a numeric string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHolidayRequest")]
pub struct HolidayRequest {
    pub start_date:   Option<String>,
    pub end_date:     Option<String>,
    pub holiday_year: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Holiday year {0:?} is not a whole number")]
    InvalidHolidayYear(String),
}

impl HolidayRequest {
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>, holiday_year: i32) -> Self {
        Self {
            start_date:   Some(start_date.into()),
            end_date:     Some(end_date.into()),
            holiday_year: Some(holiday_year),
        }
    }

    /// # Errors
    /// See [`validate`].
    pub fn validate(&self) -> Result<ValidatedRange, ValidationError> {
        validate(
            self.start_date.as_deref(),
            self.end_date.as_deref(),
            self.holiday_year,
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum YearField {
    Number(i64),
    Text(String),
}

impl YearField {
    fn resolve(self) -> Result<Option<i32>, RequestError> {
        match self {
            Self::Number(n) => i32::try_from(n)
                .map(Some)
                .map_err(|_| RequestError::InvalidHolidayYear(n.to_string())),
            Self::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Ok(None);
                }
                trimmed
                    .parse()
                    .map(Some)
                    .map_err(|_| RequestError::InvalidHolidayYear(text.clone()))
            },
        }
    }
}

#[derive(Deserialize)]
struct RawHolidayRequest {
    start_date:   Option<String>,
    #[serde(rename = "startDate")]
    start_camel:  Option<String>,
    start:        Option<String>,
    from_date:    Option<String>,
    end_date:     Option<String>,
    #[serde(rename = "endDate")]
    end_camel:    Option<String>,
    end:          Option<String>,
    to_date:      Option<String>,
    holiday_year: Option<YearField>,
    #[serde(rename = "holidayYear")]
    year_camel:   Option<YearField>,
    year:         Option<YearField>,
}

fn first_text(candidates: [Option<String>; 4]) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.trim().is_empty())
}

fn first_year(candidates: [Option<YearField>; 3]) -> Result<Option<i32>, RequestError> {
    for candidate in candidates.into_iter().flatten() {
        if let Some(year) = candidate.resolve()? {
            return Ok(Some(year));
        }
    }
    Ok(None)
}

impl TryFrom<RawHolidayRequest> for HolidayRequest {
    type Error = RequestError;

    fn try_from(raw: RawHolidayRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            start_date:   first_text([raw.start_date, raw.start_camel, raw.start, raw.from_date]),
            end_date:     first_text([raw.end_date, raw.end_camel, raw.end, raw.to_date]),
            holiday_year: first_year([raw.holiday_year, raw.year_camel, raw.year])?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationErrorKind;
    use crate::test_utils::date;

    fn parse(json: &str) -> HolidayRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_canonical_names() {
        let request = parse(r#"{"start_date":"05/12/2024","end_date":"10/12/2024","holiday_year":2025}"#);
        assert_eq!(request, HolidayRequest::new("05/12/2024", "10/12/2024", 2025));
    }

    #[test]
    fn test_camel_case_names() {
        let request = parse(r#"{"startDate":"05/12/2024","endDate":"10/12/2024","holidayYear":2025}"#);
        assert_eq!(request, HolidayRequest::new("05/12/2024", "10/12/2024", 2025));
    }

    #[test]
    fn test_short_names() {
        let request = parse(r#"{"start":"05/12/2024","to_date":"10/12/2024","year":"2025"}"#);
        assert_eq!(request, HolidayRequest::new("05/12/2024", "10/12/2024", 2025));
    }

    #[test]
    fn test_resolution_order() {
        let request = parse(
            r#"{"start":"01/01/2025","start_date":"05/12/2024","endDate":"10/12/2024","end":"11/12/2024","year":2024,"holiday_year":2025}"#,
        );
        assert_eq!(request.start_date.as_deref(), Some("05/12/2024"));
        assert_eq!(request.end_date.as_deref(), Some("10/12/2024"));
        assert_eq!(request.holiday_year, Some(2025));
    }

    #[test]
    fn test_blank_values_fall_through() {
        let request = parse(r#"{"start_date":"","startDate":"05/12/2024","holiday_year":"  ","year":2025}"#);
        assert_eq!(request.start_date.as_deref(), Some("05/12/2024"));
        assert_eq!(request.holiday_year, Some(2025));
    }

    #[test]
    fn test_missing_and_null_fields() {
        let request = parse(r#"{"end_date":null}"#);
        assert_eq!(request, HolidayRequest::default());

        let err = request.validate().unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::MissingField);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let request = parse(r#"{"start_date":"05/12/2024","end_date":"10/12/2024","holiday_year":2025,"half_day":true}"#);
        assert_eq!(request.holiday_year, Some(2025));
    }

    #[test]
    fn test_non_numeric_year_is_rejected() {
        let result = serde_json::from_str::<HolidayRequest>(r#"{"holiday_year":"next"}"#);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Holiday year \"next\" is not a whole number"));

        assert!(serde_json::from_str::<HolidayRequest>(r#"{"holiday_year":9999999999}"#).is_err());
    }

    #[test]
    fn test_validate_delegates() {
        let range = parse(r#"{"startDate":"05/12/2024","endDate":"10/12/2024","holidayYear":"2025"}"#)
            .validate()
            .unwrap();
        assert_eq!(range.start(), date(5, 12, 2024));
        assert_eq!(range.end(), date(10, 12, 2024));

        let err = HolidayRequest::new("01/01/2024", "05/01/2024", 2025)
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ValidationErrorKind::OutsideCycleWindow);
    }

    #[test]
    fn test_serializes_canonical_names() {
        let json = serde_json::to_value(HolidayRequest::new("05/12/2024", "10/12/2024", 2025)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "start_date": "05/12/2024",
                "end_date": "10/12/2024",
                "holiday_year": 2025
            })
        );
    }
}
