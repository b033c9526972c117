//! Pure conversion functions: TOML ticket entries -> domain types.

use anyhow::{Context, Result};

use ticketdesk_calendar::CalendarDate;
use ticketdesk_ticket::{TrackedTicket, WorkTicket};

use crate::config::{TicketFile, TicketToml};

/// Builds a validated, tracked ticket from one TOML entry.
pub fn build_ticket(entry: &TicketToml) -> Result<TrackedTicket> {
    let date: CalendarDate = entry
        .date
        .parse()
        .with_context(|| format!("invalid date for ticket {}", entry.number))?;
    let ticket = WorkTicket::new(
        entry.number,
        &entry.client_id,
        i32::from(date.day()),
        i32::from(date.month()),
        i32::from(date.year()),
        &entry.description,
    )
    .with_context(|| format!("invalid ticket {}", entry.number))?;

    let mut tracked = TrackedTicket::new(ticket);
    if entry.closed {
        tracked.close();
    }
    Ok(tracked)
}

/// Builds every ticket in the file, stopping at the first invalid entry.
pub fn build_tickets(file: &TicketFile) -> Result<Vec<TrackedTicket>> {
    file.tickets.iter().map(build_ticket).collect()
}
