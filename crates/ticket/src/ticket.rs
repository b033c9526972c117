//! The work ticket record.

use std::fmt;

use tracing::debug;

use ticketdesk_calendar::CalendarDate;

use crate::error::TicketError;

/// Earliest year a ticket may be dated.
pub const MIN_TICKET_YEAR: i32 = 2000;

/// Latest year a ticket may be dated.
pub const MAX_TICKET_YEAR: i32 = 2099;

/// A client work ticket: number, client id, issue date and description.
///
/// Tickets built with [`WorkTicket::new`] or changed through
/// [`WorkTicket::try_update`] hold a positive number, non-empty strings and a
/// date in 2000..=2099. [`WorkTicket::default`] is the one exception: number
/// 0, empty strings, 1 January 2000.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WorkTicket {
    number: u64,
    client_id: String,
    date: CalendarDate,
    description: String,
}

/// Checks every field and returns the validated number and date.
///
/// Checks run in a fixed order: number, year, client id and description,
/// then the full date.
fn validate(
    number: i64,
    client_id: &str,
    day: i32,
    month: i32,
    year: i32,
    description: &str,
) -> Result<(u64, CalendarDate), TicketError> {
    let number = checked_number(number)?;
    check_year(year)?;
    if client_id.is_empty() {
        return Err(TicketError::EmptyClientId);
    }
    if description.is_empty() {
        return Err(TicketError::EmptyDescription);
    }
    let date = CalendarDate::new(day, month, year)?;
    Ok((number, date))
}

fn checked_number(number: i64) -> Result<u64, TicketError> {
    if number > 0 {
        Ok(number as u64)
    } else {
        Err(TicketError::InvalidTicketNumber { number })
    }
}

fn check_year(year: i32) -> Result<(), TicketError> {
    if (MIN_TICKET_YEAR..=MAX_TICKET_YEAR).contains(&year) {
        Ok(())
    } else {
        Err(TicketError::YearOutOfRange {
            year,
            min: MIN_TICKET_YEAR,
            max: MAX_TICKET_YEAR,
        })
    }
}

impl WorkTicket {
    /// Creates a validated ticket.
    ///
    /// # Errors
    ///
    /// Returns the first [`TicketError`] found, in the order described on
    /// [`WorkTicket::try_update`].
    pub fn new(
        number: i64,
        client_id: &str,
        day: i32,
        month: i32,
        year: i32,
        description: &str,
    ) -> Result<Self, TicketError> {
        let mut ticket = Self::default();
        ticket.try_update(number, client_id, day, month, year, description)?;
        Ok(ticket)
    }

    /// Replaces every field, or none of them.
    ///
    /// Validation order:
    /// 1. `number` must be greater than zero.
    /// 2. `year` must be in 2000..=2099.
    /// 3. `client_id` and `description` must not be empty.
    /// 4. `day` and `month` must form a valid date in `year`.
    ///
    /// # Errors
    ///
    /// Returns the first failed check; the ticket is left untouched.
    pub fn try_update(
        &mut self,
        number: i64,
        client_id: &str,
        day: i32,
        month: i32,
        year: i32,
        description: &str,
    ) -> Result<(), TicketError> {
        let (number, date) = validate(number, client_id, day, month, year, description)?;
        self.number = number;
        self.client_id = client_id.to_string();
        self.date = date;
        self.description = description.to_string();
        Ok(())
    }

    /// Like [`WorkTicket::try_update`], but reports only whether the update
    /// was applied.
    pub fn update(
        &mut self,
        number: i64,
        client_id: &str,
        day: i32,
        month: i32,
        year: i32,
        description: &str,
    ) -> bool {
        match self.try_update(number, client_id, day, month, year, description) {
            Ok(()) => true,
            Err(err) => {
                debug!(number = self.number, error = %err, "ticket update rejected");
                false
            }
        }
    }

    /// # Errors
    ///
    /// Returns [`TicketError::InvalidTicketNumber`] if `number <= 0`.
    pub fn set_ticket_number(&mut self, number: i64) -> Result<(), TicketError> {
        self.number = checked_number(number)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`TicketError::EmptyClientId`] if `client_id` is empty.
    pub fn set_client_id(&mut self, client_id: impl Into<String>) -> Result<(), TicketError> {
        let client_id = client_id.into();
        if client_id.is_empty() {
            return Err(TicketError::EmptyClientId);
        }
        self.client_id = client_id;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`TicketError::EmptyDescription`] if `description` is empty.
    pub fn set_description(&mut self, description: impl Into<String>) -> Result<(), TicketError> {
        let description = description.into();
        if description.is_empty() {
            return Err(TicketError::EmptyDescription);
        }
        self.description = description;
        Ok(())
    }

    /// Sets the issue date.
    ///
    /// # Errors
    ///
    /// Returns [`TicketError::YearOutOfRange`] if `year` is outside
    /// 2000..=2099, or [`TicketError::Date`] if the day or month is invalid.
    pub fn set_date(&mut self, day: i32, month: i32, year: i32) -> Result<(), TicketError> {
        check_year(year)?;
        self.date.set_date(day, month, year)?;
        Ok(())
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn date(&self) -> CalendarDate {
        self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns a multi-line view of the ticket for console display.
    pub fn report(&self) -> TicketReport<'_> {
        TicketReport { ticket: self }
    }
}

impl fmt::Display for WorkTicket {
    /// One line, e.g. `Work Ticket # 2 - ABC123 (10/03/2012): Printer jam`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Work Ticket # {} - {} ({}): {}",
            self.number, self.client_id, self.date, self.description
        )
    }
}

/// Multi-line rendering of a [`WorkTicket`], one labelled field per line.
#[derive(Debug, Clone, Copy)]
pub struct TicketReport<'a> {
    ticket: &'a WorkTicket,
}

impl fmt::Display for TicketReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Work Ticket #: {}", self.ticket.number)?;
        writeln!(f, "Client ID:     {}", self.ticket.client_id)?;
        writeln!(f, "Date:          {}", self.ticket.date)?;
        write!(f, "Issue:         {}", self.ticket.description)
    }
}
