use crate::CalendarDate;

/// Builds a date known to be valid, written in the same order as `dd/mm/yyyy`.
pub fn date(day: u32, month: u32, year: u32) -> CalendarDate {
    CalendarDate::from_components(year, month, day).expect("test fixture date must exist")
}
