//! Interactive ticket entry over line-based input.
//!
//! [`TicketReader`] writes prompts to one handle and reads answers, one per
//! line, from another. Any failure marks the reader as failed and is handed
//! back to the caller; nothing is swallowed.

use std::io::{BufRead, Write};
use std::str::FromStr;

use tracing::debug;

use ticketdesk_calendar::CalendarDate;

use crate::error::EntryError;
use crate::ticket::WorkTicket;

/// Raw answers collected for one ticket, before ticket validation.
struct Answers {
    number: i64,
    client_id: String,
    date: CalendarDate,
    description: String,
}

/// Prompts for tickets and dates on a console-like pair of handles.
#[derive(Debug)]
pub struct TicketReader<R, W> {
    input: R,
    output: W,
    failed: bool,
}

impl<R: BufRead, W: Write> TicketReader<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            failed: false,
        }
    }

    /// Returns `true` once any read has failed. Stays set until [`clear`].
    ///
    /// [`clear`]: TicketReader::clear
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Resets the failed flag.
    pub fn clear(&mut self) {
        self.failed = false;
    }

    /// Returns the underlying handles.
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    /// Prompts for day, month and year and builds a date.
    ///
    /// # Errors
    ///
    /// I/O failures, end of input, non-numeric answers and invalid dates are
    /// all returned, and mark the reader as failed.
    pub fn read_date(&mut self) -> Result<CalendarDate, EntryError> {
        let result = self.date_answers();
        self.track(result)
    }

    /// Prompts for every ticket field and builds a validated ticket.
    ///
    /// # Errors
    ///
    /// Same as [`TicketReader::read_date`], plus any [`crate::TicketError`]
    /// raised by [`WorkTicket::new`].
    pub fn read_ticket(&mut self) -> Result<WorkTicket, EntryError> {
        let result = self.ticket_answers().and_then(|a| {
            let date = a.date;
            WorkTicket::new(
                a.number,
                &a.client_id,
                i32::from(date.day()),
                i32::from(date.month()),
                i32::from(date.year()),
                &a.description,
            )
            .map_err(EntryError::from)
        });
        self.track(result)
    }

    /// Prompts for every ticket field and applies them to `ticket` as one
    /// all-or-nothing update.
    ///
    /// # Errors
    ///
    /// Same as [`TicketReader::read_ticket`]. `ticket` is untouched on error.
    pub fn read_into(&mut self, ticket: &mut WorkTicket) -> Result<(), EntryError> {
        let result = self.ticket_answers().and_then(|a| {
            let date = a.date;
            ticket
                .try_update(
                    a.number,
                    &a.client_id,
                    i32::from(date.day()),
                    i32::from(date.month()),
                    i32::from(date.year()),
                    &a.description,
                )
                .map_err(EntryError::from)
        });
        self.track(result)
    }

    fn track<T>(&mut self, result: Result<T, EntryError>) -> Result<T, EntryError> {
        if let Err(err) = &result {
            debug!(error = %err, "console entry failed");
            self.failed = true;
        }
        result
    }

    fn ticket_answers(&mut self) -> Result<Answers, EntryError> {
        let number = self.number("WorkTicket #: ", "ticket number")?;
        self.prompt("Client ID: ")?;
        let client_id = self.line("client id")?.trim().to_string();
        self.prompt("Date (dd/mm/yyyy): ")?;
        writeln!(self.output)?;
        let date = self.date_answers()?;
        self.prompt("Issue: ")?;
        let description = self.line("description")?.trim().to_string();
        Ok(Answers {
            number,
            client_id,
            date,
            description,
        })
    }

    fn date_answers(&mut self) -> Result<CalendarDate, EntryError> {
        let day = self.number("Enter Day: ", "day")?;
        let month = self.number("Enter Month: ", "month")?;
        let year = self.number("Enter Year: ", "year")?;
        Ok(CalendarDate::new(day, month, year)?)
    }

    fn prompt(&mut self, text: &str) -> Result<(), EntryError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    fn line(&mut self, field: &'static str) -> Result<String, EntryError> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(EntryError::EndOfInput { field });
        }
        Ok(buf)
    }

    fn number<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T, EntryError> {
        self.prompt(prompt)?;
        let line = self.line(field)?;
        let text = line.trim();
        text.parse().map_err(|_| EntryError::InvalidNumber {
            field,
            input: text.to_string(),
        })
    }
}
