//! Error types for the ticketdesk-ticket crate.

use ticketdesk_calendar::{CalendarError, ErrorKind};

/// Error type for ticket construction and validated updates.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TicketError {
    /// Returned when a ticket number is zero or negative.
    #[error("ticket number must be greater than zero, got {number}")]
    InvalidTicketNumber {
        /// The rejected ticket number.
        number: i64,
    },

    /// Returned when a ticket date falls outside the accepted years.
    #[error("year must be between {min} and {max}, got {year}")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
        /// Smallest accepted year.
        min: i32,
        /// Largest accepted year.
        max: i32,
    },

    /// Returned when the client id is empty.
    #[error("client id must be at least one character long")]
    EmptyClientId,

    /// Returned when the description is empty.
    #[error("description must be at least one character long")]
    EmptyDescription,

    /// Returned when the day and month do not form a valid date.
    #[error(transparent)]
    Date(#[from] CalendarError),
}

impl TicketError {
    /// Returns whether this is a range failure or an invalid argument.
    ///
    /// Only date errors can be range failures; every ticket-level rule,
    /// including the ticket year window, is an invalid argument.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Date(err) => err.kind(),
            _ => ErrorKind::InvalidArgument,
        }
    }
}

/// Error type for interactive ticket entry.
#[derive(Debug, thiserror::Error)]
pub enum EntryError {
    /// Returned when reading the input or writing a prompt fails.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),

    /// Returned when the input ends before the named field was read.
    #[error("input ended before {field} was entered")]
    EndOfInput {
        /// Name of the field being prompted for.
        field: &'static str,
    },

    /// Returned when a numeric field cannot be parsed.
    #[error("{input:?} is not a whole number ({field})")]
    InvalidNumber {
        /// Name of the field being prompted for.
        field: &'static str,
        /// The rejected text.
        input: String,
    },

    /// Returned when the entered date is not valid.
    #[error(transparent)]
    Date(#[from] CalendarError),

    /// Returned when the entered ticket fails validation.
    #[error(transparent)]
    Ticket(#[from] TicketError),
}
