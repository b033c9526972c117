//! Enter command: prompt for one ticket on the console.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ticketdesk_ticket::{TicketReader, TrackedTicket};

/// Prompts for a ticket on stdin/stdout and prints it back.
pub fn run() -> Result<()> {
    let _cmd = info_span!("enter").entered();

    let mut reader = TicketReader::new(io::stdin().lock(), io::stdout().lock());
    let ticket = reader.read_ticket().context("ticket entry failed")?;
    let (_, mut out) = reader.into_inner();

    info!(number = ticket.number(), "ticket entered");
    let tracked = TrackedTicket::new(ticket);
    writeln!(out, "\n{}", tracked.report())?;
    Ok(())
}
