use std::fmt;

use serde::Serialize;

use crate::{CYCLE_END_DAY, CYCLE_END_MONTH, CYCLE_START_DAY, CYCLE_START_MONTH, CalendarDate};

/// The entitlement window of one holiday year: 1 December of the previous
/// calendar year through 30 November of the named year, both inclusive.
///
/// The bounds are kept as `dd/mm/yyyy` text exactly as the backend states
/// them. For years outside the supported calendar they may not parse, in
/// which case the window is empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HolidayCycle {
    #[serde(skip)]
    holiday_year: i32,
    cycle_start:  String,
    cycle_end:    String,
}

/// Computes the cycle window for `holiday_year`.
///
/// Any integer is accepted; no range restriction applies here.
pub fn compute_cycle(holiday_year: i32) -> HolidayCycle {
    let year = i64::from(holiday_year);
    HolidayCycle {
        holiday_year,
        cycle_start: format!("{CYCLE_START_DAY:02}/{CYCLE_START_MONTH:02}/{}", year - 1),
        cycle_end: format!("{CYCLE_END_DAY:02}/{CYCLE_END_MONTH:02}/{year}"),
    }
}

impl HolidayCycle {
    pub const fn holiday_year(&self) -> i32 {
        self.holiday_year
    }

    pub fn cycle_start(&self) -> &str {
        &self.cycle_start
    }

    pub fn cycle_end(&self) -> &str {
        &self.cycle_end
    }

    /// Parsed bounds, or `None` when either bound is not a real date.
    pub fn window(&self) -> Option<(CalendarDate, CalendarDate)> {
        let start = self.cycle_start.parse::<CalendarDate>();
        let end = self.cycle_end.parse::<CalendarDate>();
        match (start, end) {
            (Ok(start), Ok(end)) => Some((start, end)),
            (start, end) => {
                log::trace!(
                    "holiday year {} has no representable window: {:?} / {:?}",
                    self.holiday_year,
                    start.err(),
                    end.err()
                );
                None
            },
        }
    }

    /// Whether `date` falls inside the window (bounds included).
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.window()
            .is_some_and(|(start, end)| start <= *date && *date <= end)
    }

    /// The holiday year a date is booked against.
    pub fn for_date(date: &CalendarDate) -> i32 {
        let year = i32::from(date.year());
        if (date.month(), date.day()) >= (CYCLE_START_MONTH, CYCLE_START_DAY) {
            year + 1
        } else {
            year
        }
    }
}

impl fmt::Display for HolidayCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.cycle_start, self.cycle_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_compute_cycle_cases() {
        struct TestCase {
            holiday_year: i32,
            start:        &'static str,
            end:          &'static str,
        }

        let cases = [
            TestCase {
                holiday_year: 2025,
                start:        "01/12/2024",
                end:          "30/11/2025",
            },
            TestCase {
                holiday_year: 2000,
                start:        "01/12/1999",
                end:          "30/11/2000",
            },
            TestCase {
                holiday_year: 1,
                start:        "01/12/0",
                end:          "30/11/1",
            },
            TestCase {
                holiday_year: 0,
                start:        "01/12/-1",
                end:          "30/11/0",
            },
            TestCase {
                holiday_year: -40,
                start:        "01/12/-41",
                end:          "30/11/-40",
            },
            TestCase {
                holiday_year: 123_456,
                start:        "01/12/123455",
                end:          "30/11/123456",
            },
        ];

        for case in &cases {
            let cycle = compute_cycle(case.holiday_year);
            assert_eq!(cycle.holiday_year(), case.holiday_year);
            assert_eq!(cycle.cycle_start(), case.start, "start of {}", case.holiday_year);
            assert_eq!(cycle.cycle_end(), case.end, "end of {}", case.holiday_year);
        }
    }

    #[test]
    fn test_compute_cycle_extremes_do_not_overflow() {
        let cycle = compute_cycle(i32::MIN);
        assert_eq!(cycle.cycle_start(), "01/12/-2147483649");
        assert_eq!(cycle.cycle_end(), "30/11/-2147483648");

        let cycle = compute_cycle(i32::MAX);
        assert_eq!(cycle.cycle_start(), "01/12/2147483646");
    }

    #[test]
    fn test_window_parses_bounds() {
        let (start, end) = compute_cycle(2025).window().unwrap();
        assert_eq!(start, date(1, 12, 2024));
        assert_eq!(end, date(30, 11, 2025));
        assert!(start < end);
    }

    #[test]
    fn test_window_outside_supported_calendar() {
        assert!(compute_cycle(1).window().is_none());
        assert!(compute_cycle(0).window().is_none());
        assert!(compute_cycle(-3).window().is_none());
        assert!(compute_cycle(10_000).window().is_none());
        assert!(compute_cycle(2).window().is_some());
        assert!(compute_cycle(9999).window().is_some());
    }

    #[test]
    fn test_contains_is_inclusive() {
        let cycle = compute_cycle(2025);
        assert!(cycle.contains(&date(1, 12, 2024)));
        assert!(cycle.contains(&date(30, 11, 2025)));
        assert!(cycle.contains(&date(15, 6, 2025)));
        assert!(!cycle.contains(&date(30, 11, 2024)));
        assert!(!cycle.contains(&date(1, 12, 2025)));
    }

    #[test]
    fn test_empty_window_contains_nothing() {
        assert!(!compute_cycle(0).contains(&date(1, 1, 1)));
    }

    #[test]
    fn test_for_date() {
        assert_eq!(HolidayCycle::for_date(&date(1, 12, 2024)), 2025);
        assert_eq!(HolidayCycle::for_date(&date(31, 12, 2024)), 2025);
        assert_eq!(HolidayCycle::for_date(&date(1, 1, 2025)), 2025);
        assert_eq!(HolidayCycle::for_date(&date(30, 11, 2025)), 2025);
        assert_eq!(HolidayCycle::for_date(&date(1, 12, 2025)), 2026);
    }

    #[test]
    fn test_for_date_round_trips_through_contains() {
        for value in [date(1, 12, 2024), date(29, 2, 2024), date(30, 11, 2030), date(15, 7, 1999)] {
            assert!(compute_cycle(HolidayCycle::for_date(&value)).contains(&value), "{value}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(compute_cycle(2025).to_string(), "01/12/2024 - 30/11/2025");
    }

    #[test]
    fn test_serialize_shape() {
        let json = serde_json::to_value(compute_cycle(2025)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "cycle_start": "01/12/2024", "cycle_end": "30/11/2025" })
        );
    }
}
