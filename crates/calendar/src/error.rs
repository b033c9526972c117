//! Error types for the ticketdesk-calendar crate.

/// Broad classification of a calendar or ticket validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A numeric value (day, month, year, ordinal) is outside its domain.
    Range,
    /// A non-numeric contract violation, such as an unknown field key.
    InvalidArgument,
}

/// Error type for all fallible operations in the ticketdesk-calendar crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year is outside 1..=9999.
    #[error("{year} is an invalid value for year (must be between {min:04} and {max:04} inclusive)")]
    YearOutOfRange {
        /// The rejected year.
        year: i64,
        /// Smallest accepted year.
        min: i64,
        /// Largest accepted year.
        max: i64,
    },

    /// Returned when a month is outside 1..=12.
    #[error("{month} is an invalid value for month (must be between 1 and 12 inclusive)")]
    MonthOutOfRange {
        /// The rejected month.
        month: i64,
    },

    /// Returned when a day does not exist in the given month and year.
    #[error(
        "{day} is an invalid value for a day in {month_name} {year:04} (must be between 1 and {max_day} inclusive)"
    )]
    DayOutOfRange {
        /// The rejected day.
        day: i64,
        /// English name of the month the day was checked against.
        month_name: &'static str,
        /// Year the day was checked against.
        year: u16,
        /// Number of days in that month.
        max_day: u8,
    },

    /// Returned when an ordinal day number, or the result of date
    /// arithmetic, falls outside 1..=`max`.
    #[error("{ordinal} is an invalid value for a day number (must be between 1 and {max} inclusive)")]
    OrdinalOutOfRange {
        /// The rejected day number.
        ordinal: i64,
        /// Day number of 31 December 9999.
        max: i64,
    },

    /// Returned by keyed field access for anything but `d`, `m` or `y`.
    #[error("'{key}' is an invalid parameter (options are 'd', 'm', or 'y')")]
    InvalidFieldKey {
        /// The rejected key.
        key: char,
    },

    /// Returned when text cannot be parsed as `dd/mm/yyyy`.
    #[error("malformed date {input:?} (expected dd/mm/yyyy)")]
    Malformed {
        /// The rejected text.
        input: String,
    },
}

impl CalendarError {
    /// Returns whether this is a range failure or an invalid argument.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::YearOutOfRange { .. }
            | Self::MonthOutOfRange { .. }
            | Self::DayOutOfRange { .. }
            | Self::OrdinalOutOfRange { .. } => ErrorKind::Range,
            Self::InvalidFieldKey { .. } | Self::Malformed { .. } => ErrorKind::InvalidArgument,
        }
    }
}
