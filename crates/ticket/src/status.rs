//! Open/closed lifecycle for work tickets.

use std::fmt;

use tracing::debug;

use crate::ticket::WorkTicket;

/// Lifecycle state of a tracked ticket.
///
/// The only transition is `Open -> Closed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TicketStatus {
    #[default]
    Open,
    Closed,
}

impl TicketStatus {
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Lower-case label used in display output.
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A [`WorkTicket`] paired with its [`TicketStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TrackedTicket {
    ticket: WorkTicket,
    status: TicketStatus,
}

impl TrackedTicket {
    /// Starts tracking `ticket` as open.
    pub fn new(ticket: WorkTicket) -> Self {
        Self::with_status(ticket, TicketStatus::Open)
    }

    pub fn with_status(ticket: WorkTicket, status: TicketStatus) -> Self {
        Self { ticket, status }
    }

    pub fn ticket(&self) -> &WorkTicket {
        &self.ticket
    }

    /// Mutable access to the ticket fields. The status is not affected.
    pub fn ticket_mut(&mut self) -> &mut WorkTicket {
        &mut self.ticket
    }

    pub fn status(&self) -> TicketStatus {
        self.status
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Closes the ticket. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.status == TicketStatus::Closed {
            return false;
        }
        self.status = TicketStatus::Closed;
        debug!(number = self.ticket.number(), "ticket closed");
        true
    }

    /// Returns a multi-line view including the status.
    pub fn report(&self) -> TrackedReport<'_> {
        TrackedReport { tracked: self }
    }

    /// Consumes the wrapper, returning the ticket.
    pub fn into_ticket(self) -> WorkTicket {
        self.ticket
    }
}

impl From<WorkTicket> for TrackedTicket {
    fn from(ticket: WorkTicket) -> Self {
        Self::new(ticket)
    }
}

impl fmt::Display for TrackedTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.ticket, self.status)
    }
}

/// Multi-line rendering of a [`TrackedTicket`].
#[derive(Debug, Clone, Copy)]
pub struct TrackedReport<'a> {
    tracked: &'a TrackedTicket,
}

impl fmt::Display for TrackedReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.tracked.ticket.report())?;
        write!(f, "Status:        {}", self.tracked.status)
    }
}
