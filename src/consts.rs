/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Longest month length
pub const MAX_DAY: u8 = 31;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Separator between day, month and year in `dd/mm/yyyy`
pub const DATE_SEPARATOR: char = '/';

/// Day the holiday year opens on (in the previous calendar year)
pub const CYCLE_START_DAY: u8 = 1;
/// Month the holiday year opens in (December of the previous calendar year)
pub const CYCLE_START_MONTH: u8 = 12;
/// Day the holiday year closes on
pub const CYCLE_END_DAY: u8 = 30;
/// Month the holiday year closes in (November of the named year)
pub const CYCLE_END_MONTH: u8 = 11;

/// Field names as the backend knows them
pub const START_DATE_FIELD: &str = "start_date";
pub const END_DATE_FIELD: &str = "end_date";
pub const HOLIDAY_YEAR_FIELD: &str = "holiday_year";
