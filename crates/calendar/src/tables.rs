//! Month and weekday lookup tables for the proleptic Gregorian calendar.

/// Smallest representable year.
pub const MIN_YEAR: u16 = 1;

/// Largest representable year.
pub const MAX_YEAR: u16 = 9999;

/// Day number of 31 December 9999, the last representable date.
pub const MAX_ORDINAL: i64 = 3_652_059;

/// Days in a 400-year Gregorian cycle.
pub(crate) const DAYS_PER_400_YEARS: i64 = 146_097;

/// Days in a century that does not end on a 400-year boundary.
pub(crate) const DAYS_PER_100_YEARS: i64 = 36_524;

/// Days in a 4-year cycle containing one leap day.
pub(crate) const DAYS_PER_4_YEARS: i64 = 1_461;

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days of a common year preceding the first of each month (index 0 unused).
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] =
    [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// English month names (index 0 unused).
pub(crate) const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English weekday names, indexed by `ordinal % 7` (0 = Sunday).
pub(crate) const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Returns `true` if `year` is a leap year in the Gregorian calendar.
///
/// A year is a leap year when it is divisible by 4, except for century
/// years, which must also be divisible by 400.
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in `month` of `year`, or `None` if `month`
/// is outside 1..=12.
pub fn days_in_month(month: u8, year: i64) -> Option<u8> {
    if !(1..=12).contains(&month) {
        return None;
    }
    if month == 2 && is_leap_year(year) {
        Some(29)
    } else {
        Some(DAYS_PER_MONTH[month as usize])
    }
}

/// Returns the English name of `month`, or `None` if `month` is outside 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    if (1..=12).contains(&month) {
        Some(MONTH_NAMES[month as usize])
    } else {
        None
    }
}
