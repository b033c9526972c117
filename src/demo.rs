//! Demo command: the fixed two-ticket walkthrough.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use ticketdesk_ticket::{TrackedTicket, WorkTicket};

const NO_CHANGES: &str = "Errors! No changes to the ticket made.";

/// Runs the walkthrough, writing everything to `out`.
pub fn run(out: &mut impl Write) -> Result<()> {
    let _cmd = info_span!("demo").entered();

    let mut first = TrackedTicket::default();
    let mut second = TrackedTicket::new(
        WorkTicket::new(1, "AMCE_123", 1, 7, 2014, "Password Reset")
            .context("failed to build initial ticket")?,
    );

    writeln!(out, "As Initialized:")?;
    writeln!(out, "{}\n", first.report())?;
    writeln!(out, "{}\n", second.report())?;

    if !first.ticket_mut().update(
        2,
        "MACDONALD-001",
        10,
        3,
        2012,
        "User cannot locate 'any' key.",
    ) {
        writeln!(out, "{NO_CHANGES}\n")?;
    }
    writeln!(out, "Ticket 1:\n{}\n", first.report())?;

    if !second
        .ticket_mut()
        .update(-1, "BLAGO-042", 13, 32, 11, "")
    {
        writeln!(out, "{NO_CHANGES}\n")?;
    }
    writeln!(out, "Ticket 2:\n{}\n", second.report())?;

    second.close();
    writeln!(out, "After Ticket 2 closed:\n{}", second.report())?;

    info!(open = first.is_open(), closed = !second.is_open(), "demo finished");
    Ok(())
}
