//! Conversion between `(year, month, day)` and ordinal day numbers.
//!
//! Day 1 is 1 January of year 1 in the proleptic Gregorian calendar. There
//! is no year zero.

use crate::tables::{
    DAYS_BEFORE_MONTH, DAYS_PER_4_YEARS, DAYS_PER_100_YEARS, DAYS_PER_400_YEARS, days_in_month,
    is_leap_year,
};

/// Number of leap years in `1..year`.
fn leap_years_before(year: i64) -> i64 {
    let y = year - 1;
    y / 4 - y / 100 + y / 400
}

/// Returns the ordinal day number of a date.
///
/// The caller guarantees that the triple is a valid date.
pub(crate) fn to_ordinal(year: u16, month: u8, day: u8) -> i64 {
    let year = i64::from(year);
    let mut ordinal = 365 * (year - 1)
        + leap_years_before(year)
        + i64::from(DAYS_BEFORE_MONTH[month as usize])
        + i64::from(day);
    if month > 2 && is_leap_year(year) {
        ordinal += 1;
    }
    ordinal
}

/// Returns the `(year, month, day)` triple of an ordinal day number.
///
/// The caller guarantees `ordinal >= 1`.
pub(crate) fn from_ordinal(ordinal: i64) -> (u16, u8, u8) {
    let mut n = ordinal - 1;

    let n400 = n / DAYS_PER_400_YEARS;
    n %= DAYS_PER_400_YEARS;
    let n100 = n / DAYS_PER_100_YEARS;
    n %= DAYS_PER_100_YEARS;
    let n4 = n / DAYS_PER_4_YEARS;
    n %= DAYS_PER_4_YEARS;
    let n1 = n / 365;
    n %= 365;

    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1 + 1;

    // The last day of a 4-year or 400-year cycle is 31 December of the
    // previous year: a full count of 4 (or 4 centuries) means we overshot.
    if n1 == 4 || n100 == 4 {
        return ((year - 1) as u16, 12, 31);
    }

    let mut month = 1u8;
    let mut remaining = n;
    loop {
        let length = i64::from(days_in_month(month, year).unwrap_or(31));
        if remaining < length {
            break;
        }
        remaining -= length;
        month += 1;
    }

    (year as u16, month, (remaining + 1) as u8)
}
