//! Proleptic Gregorian date with ordinal day arithmetic.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::Datelike;

use crate::error::CalendarError;
use crate::ordinal;
use crate::tables::{self, MAX_ORDINAL, MAX_YEAR, MIN_YEAR};
use crate::weekday::Weekday;

/// A valid date between 1 January 0001 and 31 December 9999.
///
/// Every constructor and mutator validates its input, so a `CalendarDate`
/// always holds a real Gregorian date. Ordering follows the ordinal day
/// number; equality is field-wise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    year: u16,
    month: u8,
    day: u8,
}

/// Selects one component of a [`CalendarDate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Day,
    Month,
    Year,
}

impl TryFrom<char> for DateField {
    type Error = CalendarError;

    /// Accepts `d`, `m` and `y` in either case.
    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key {
            'd' | 'D' => Ok(Self::Day),
            'm' | 'M' => Ok(Self::Month),
            'y' | 'Y' => Ok(Self::Year),
            _ => Err(CalendarError::InvalidFieldKey { key }),
        }
    }
}

impl Default for CalendarDate {
    /// 1 January 2000.
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
        }
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_ordinal().cmp(&other.to_ordinal())
    }
}

impl CalendarDate {
    /// Creates a date from day, month and year.
    ///
    /// The year is checked first, then the month, then the day against the
    /// length of that month (29 for February in leap years).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::YearOutOfRange`], [`CalendarError::MonthOutOfRange`]
    /// or [`CalendarError::DayOutOfRange`] for the first field that is invalid.
    pub fn new(day: i32, month: i32, year: i32) -> Result<Self, CalendarError> {
        let (day, month, year) = (i64::from(day), i64::from(month), i64::from(year));

        if !(i64::from(MIN_YEAR)..=i64::from(MAX_YEAR)).contains(&year) {
            return Err(CalendarError::YearOutOfRange {
                year,
                min: i64::from(MIN_YEAR),
                max: i64::from(MAX_YEAR),
            });
        }
        let year = year as u16;

        let Some((month, max_day)) = u8::try_from(month).ok().and_then(|m| {
            tables::days_in_month(m, i64::from(year)).map(|max_day| (m, max_day))
        }) else {
            return Err(CalendarError::MonthOutOfRange { month });
        };

        if !(1..=i64::from(max_day)).contains(&day) {
            return Err(CalendarError::DayOutOfRange {
                day,
                month_name: tables::MONTH_NAMES[month as usize],
                year,
                max_day,
            });
        }

        Ok(Self {
            year,
            month,
            day: day as u8,
        })
    }

    /// Creates a date from its ordinal day number (1 January 0001 is day 1).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`] unless
    /// `1 <= ordinal <= 3_652_059` (31 December 9999).
    pub fn from_ordinal(ordinal: i64) -> Result<Self, CalendarError> {
        if !(1..=MAX_ORDINAL).contains(&ordinal) {
            return Err(CalendarError::OrdinalOutOfRange {
                ordinal,
                max: MAX_ORDINAL,
            });
        }
        let (year, month, day) = ordinal::from_ordinal(ordinal);
        Ok(Self { year, month, day })
    }

    /// Returns today's date according to the host clock, in local time.
    pub fn today() -> Self {
        let now = chrono::Local::now().date_naive();
        Self {
            year: now.year().clamp(i32::from(MIN_YEAR), i32::from(MAX_YEAR)) as u16,
            month: now.month() as u8,
            day: now.day() as u8,
        }
    }

    /// Replaces all three fields. The date is unchanged on error.
    pub fn set_date(&mut self, day: i32, month: i32, year: i32) -> Result<(), CalendarError> {
        *self = Self::new(day, month, year)?;
        Ok(())
    }

    /// Replaces the year, keeping day and month.
    ///
    /// # Errors
    ///
    /// Fails if the year is out of range or if the current day does not
    /// exist in the new year (29 February moved to a common year).
    pub fn set_year(&mut self, year: i32) -> Result<(), CalendarError> {
        *self = Self::new(i32::from(self.day), i32::from(self.month), year)?;
        Ok(())
    }

    /// Replaces the month, keeping day and year.
    ///
    /// # Errors
    ///
    /// Fails if the month is out of range or too short for the current day.
    pub fn set_month(&mut self, month: i32) -> Result<(), CalendarError> {
        *self = Self::new(i32::from(self.day), month, i32::from(self.year))?;
        Ok(())
    }

    /// Replaces the day, keeping month and year.
    pub fn set_day(&mut self, day: i32) -> Result<(), CalendarError> {
        *self = Self::new(day, i32::from(self.month), i32::from(self.year))?;
        Ok(())
    }

    /// Returns the day of the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the year (1..=9999).
    pub fn year(self) -> u16 {
        self.year
    }

    /// Returns the selected component.
    pub fn get(self, field: DateField) -> i32 {
        match field {
            DateField::Day => i32::from(self.day),
            DateField::Month => i32::from(self.month),
            DateField::Year => i32::from(self.year),
        }
    }

    /// Returns the component selected by a one-character key: `d`, `m` or
    /// `y`, in either case.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidFieldKey`] for any other key.
    pub fn field(self, key: char) -> Result<i32, CalendarError> {
        DateField::try_from(key).map(|field| self.get(field))
    }

    /// Returns `true` if the stored year is a leap year.
    pub fn is_leap_year(self) -> bool {
        tables::is_leap_year(i64::from(self.year))
    }

    /// Returns the English name of the month.
    pub fn month_name(self) -> &'static str {
        tables::MONTH_NAMES[self.month as usize]
    }

    pub fn weekday(self) -> Weekday {
        Weekday::from_ordinal(self.to_ordinal())
    }

    /// Returns the ordinal day number, 1 January 0001 being day 1.
    pub fn to_ordinal(self) -> i64 {
        ordinal::to_ordinal(self.year, self.month, self.day)
    }

    /// Returns the date `days` days later (earlier when negative).
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OrdinalOutOfRange`] if the result would be
    /// before 1 January 0001 or after 31 December 9999.
    pub fn add_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::from_ordinal(self.to_ordinal().saturating_add(days))
    }

    /// Returns the date `days` days earlier (later when negative).
    ///
    /// # Errors
    ///
    /// Same as [`CalendarDate::add_days`].
    pub fn sub_days(self, days: i64) -> Result<Self, CalendarError> {
        Self::from_ordinal(self.to_ordinal().saturating_sub(days))
    }

    /// Signed number of days from `other` to `self`.
    pub fn days_since(self, other: Self) -> i64 {
        self.to_ordinal() - other.to_ordinal()
    }

    /// Returns the following day.
    pub fn next(self) -> Result<Self, CalendarError> {
        self.add_days(1)
    }

    /// Returns the preceding day.
    pub fn previous(self) -> Result<Self, CalendarError> {
        self.sub_days(1)
    }

    /// Moves this date `days` days forward. The date is unchanged on error.
    pub fn advance(&mut self, days: i64) -> Result<(), CalendarError> {
        *self = self.add_days(days)?;
        Ok(())
    }

    /// Moves this date `days` days back. The date is unchanged on error.
    pub fn retreat(&mut self, days: i64) -> Result<(), CalendarError> {
        *self = self.sub_days(days)?;
        Ok(())
    }

    /// Formats the date as e.g. `"Saturday, January 1st, 2000"`.
    pub fn to_long_string(self) -> String {
        format!(
            "{}, {} {}{}, {:04}",
            self.weekday(),
            self.month_name(),
            self.day,
            ordinal_suffix(self.day),
            self.year
        )
    }
}

/// English ordinal suffix for a day of the month.
fn ordinal_suffix(day: u8) -> &'static str {
    match (day % 10, day) {
        (1, d) if d != 11 => "st",
        (2, d) if d != 12 => "nd",
        (3, d) if d != 13 => "rd",
        _ => "th",
    }
}

impl fmt::Display for CalendarDate {
    /// Short form, `dd/mm/yyyy`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:04}", self.day, self.month, self.year)
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    /// Parses `d/m/y` with up to two digits for day and month and up to four
    /// for the year, then validates like [`CalendarDate::new`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || CalendarError::Malformed {
            input: s.to_string(),
        };

        let mut parts = s.trim().split('/');
        let mut number = |max_len: usize| -> Result<i32, CalendarError> {
            let part = parts.next().ok_or_else(malformed)?;
            if part.is_empty() || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit())
            {
                return Err(malformed());
            }
            part.parse().map_err(|_| malformed())
        };

        let day = number(2)?;
        let month = number(2)?;
        let year = number(4)?;
        if parts.next().is_some() {
            return Err(malformed());
        }
        Self::new(day, month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(day: i32, month: i32, year: i32) -> CalendarDate {
        CalendarDate::new(day, month, year).unwrap()
    }

    #[test]
    fn new_valid() {
        let d = date(10, 3, 2012);
        assert_eq!(d.day(), 10);
        assert_eq!(d.month(), 3);
        assert_eq!(d.year(), 2012);
    }

    #[test]
    fn new_checks_year_first() {
        assert_eq!(
            CalendarDate::new(32, 13, 0).unwrap_err(),
            CalendarError::YearOutOfRange {
                year: 0,
                min: 1,
                max: 9999
            }
        );
        assert!(CalendarDate::new(1, 1, 10_000).is_err());
    }

    #[test]
    fn new_invalid_month() {
        assert_eq!(
            CalendarDate::new(1, 0, 2000).unwrap_err(),
            CalendarError::MonthOutOfRange { month: 0 }
        );
        assert_eq!(
            CalendarDate::new(1, 300, 2000).unwrap_err(),
            CalendarError::MonthOutOfRange { month: 300 }
        );
        assert_eq!(
            CalendarDate::new(1, -1, 2000).unwrap_err(),
            CalendarError::MonthOutOfRange { month: -1 }
        );
    }

    #[test]
    fn new_invalid_day() {
        assert_eq!(
            CalendarDate::new(29, 2, 2023).unwrap_err(),
            CalendarError::DayOutOfRange {
                day: 29,
                month_name: "February",
                year: 2023,
                max_day: 28,
            }
        );
        assert_eq!(
            CalendarDate::new(31, 4, 2023).unwrap_err().kind(),
            ErrorKind::Range
        );
        assert!(CalendarDate::new(0, 1, 2023).is_err());
    }

    #[test]
    fn leap_day_accepted_in_leap_years() {
        assert!(CalendarDate::new(29, 2, 2024).is_ok());
        assert!(CalendarDate::new(29, 2, 2000).is_ok());
        assert!(CalendarDate::new(29, 2, 1900).is_err());
    }

    #[test]
    fn default_is_first_of_2000() {
        assert_eq!(CalendarDate::default(), date(1, 1, 2000));
    }

    #[test]
    fn from_ordinal_bounds() {
        assert_eq!(CalendarDate::from_ordinal(1).unwrap(), date(1, 1, 1));
        assert_eq!(
            CalendarDate::from_ordinal(MAX_ORDINAL).unwrap(),
            date(31, 12, 9999)
        );
        assert_eq!(
            CalendarDate::from_ordinal(0).unwrap_err(),
            CalendarError::OrdinalOutOfRange {
                ordinal: 0,
                max: MAX_ORDINAL
            }
        );
        assert!(CalendarDate::from_ordinal(MAX_ORDINAL + 1).is_err());
    }

    #[test]
    fn set_date_is_atomic() {
        let mut d = date(15, 6, 2020);
        assert!(d.set_date(31, 2, 2021).is_err());
        assert_eq!(d, date(15, 6, 2020));
        d.set_date(1, 7, 2014).unwrap();
        assert_eq!(d, date(1, 7, 2014));
    }

    #[test]
    fn set_year_revalidates_day() {
        let mut d = date(29, 2, 2024);
        assert!(matches!(
            d.set_year(2023),
            Err(CalendarError::DayOutOfRange { max_day: 28, .. })
        ));
        assert_eq!(d, date(29, 2, 2024));
        d.set_year(2028).unwrap();
        assert_eq!(d, date(29, 2, 2028));
    }

    #[test]
    fn set_month_and_day() {
        let mut d = date(31, 1, 2023);
        assert!(d.set_month(4).is_err());
        d.set_month(3).unwrap();
        assert_eq!(d, date(31, 3, 2023));
        assert!(d.set_day(32).is_err());
        d.set_day(5).unwrap();
        assert_eq!(d, date(5, 3, 2023));
    }

    #[test]
    fn keyed_field_access() {
        let d = date(10, 3, 2012);
        assert_eq!(d.field('d').unwrap(), 10);
        assert_eq!(d.field('D').unwrap(), 10);
        assert_eq!(d.field('m').unwrap(), 3);
        assert_eq!(d.field('M').unwrap(), 3);
        assert_eq!(d.field('y').unwrap(), 2012);
        assert_eq!(d.field('Y').unwrap(), 2012);

        let err = d.field('x').unwrap_err();
        assert_eq!(err, CalendarError::InvalidFieldKey { key: 'x' });
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn weekday_reference_points() {
        assert_eq!(date(1, 1, 2000).weekday(), Weekday::Saturday);
        assert_eq!(date(1, 1, 1).weekday(), Weekday::Monday);
        assert_eq!(date(20, 7, 1969).weekday(), Weekday::Sunday);
        assert_eq!(date(31, 12, 9999).weekday(), Weekday::Friday);
    }

    #[test]
    fn arithmetic() {
        let d = date(28, 2, 2024);
        assert_eq!(d.add_days(1).unwrap(), date(29, 2, 2024));
        assert_eq!(d.add_days(2).unwrap(), date(1, 3, 2024));
        assert_eq!(d.sub_days(59).unwrap(), date(31, 12, 2023));
        assert_eq!(d.add_days(-59).unwrap(), date(31, 12, 2023));
        assert_eq!(d.add_days(0).unwrap(), d);
    }

    #[test]
    fn arithmetic_out_of_range() {
        assert!(date(1, 1, 1).previous().is_err());
        assert!(date(31, 12, 9999).next().is_err());
        assert!(date(1, 1, 2000).add_days(i64::MAX).is_err());
        assert!(date(1, 1, 2000).sub_days(i64::MAX).is_err());
    }

    #[test]
    fn advance_and_retreat_in_place() {
        let mut d = date(31, 12, 1999);
        d.advance(1).unwrap();
        assert_eq!(d, date(1, 1, 2000));
        d.retreat(366).unwrap();
        assert_eq!(d, date(31, 12, 1998));

        let mut last = date(31, 12, 9999);
        assert!(last.advance(1).is_err());
        assert_eq!(last, date(31, 12, 9999));
    }

    #[test]
    fn difference_is_signed() {
        let a = date(1, 1, 2000);
        let b = date(1, 3, 2000);
        assert_eq!(b.days_since(a), 60);
        assert_eq!(a.days_since(b), -60);
        assert_eq!(a.days_since(a), 0);
    }

    #[test]
    fn ordering_follows_ordinal() {
        let a = date(31, 12, 1999);
        let b = date(1, 1, 2000);
        assert!(a < b);
        assert!(b > a);
        assert!(date(2, 1, 2000) > date(1, 12, 1999));
        assert_eq!(a.cmp(&a), Ordering::Equal);
    }

    #[test]
    fn short_form() {
        assert_eq!(date(10, 3, 2012).to_string(), "10/03/2012");
        assert_eq!(date(1, 1, 1).to_string(), "01/01/0001");
    }

    #[test]
    fn long_form() {
        assert_eq!(
            date(1, 1, 2000).to_long_string(),
            "Saturday, January 1st, 2000"
        );
        assert_eq!(date(1, 1, 1).to_long_string(), "Monday, January 1st, 0001");
        assert_eq!(
            date(10, 3, 2012).to_long_string(),
            "Saturday, March 10th, 2012"
        );
    }

    #[test]
    fn suffixes() {
        let expected = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (24, "th"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in expected {
            assert_eq!(ordinal_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn parse_valid() {
        assert_eq!("10/03/2012".parse::<CalendarDate>().unwrap(), date(10, 3, 2012));
        assert_eq!("1/7/2014".parse::<CalendarDate>().unwrap(), date(1, 7, 2014));
        assert_eq!(" 5/5/5 ".parse::<CalendarDate>().unwrap(), date(5, 5, 5));
    }

    #[test]
    fn parse_malformed() {
        for input in ["", "10/03", "10/03/2012/1", "a/b/c", "100/1/2000", "1/1/20000", "-1/1/2000"] {
            let err = input.parse::<CalendarDate>().unwrap_err();
            assert!(
                matches!(err, CalendarError::Malformed { .. }),
                "{input:?} gave {err:?}"
            );
        }
    }

    #[test]
    fn parse_validates_range() {
        assert_eq!(
            "31/02/2023".parse::<CalendarDate>().unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn today_is_valid() {
        let today = CalendarDate::today();
        assert_eq!(
            CalendarDate::new(
                i32::from(today.day()),
                i32::from(today.month()),
                i32::from(today.year())
            )
            .unwrap(),
            today
        );
    }

    #[test]
    fn copy_trait() {
        fn assert_copy<T: Copy>() {}
        assert_copy::<CalendarDate>();
    }
}
