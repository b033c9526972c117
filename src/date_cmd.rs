//! Date command: calendar details for one date.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use ticketdesk_calendar::CalendarDate;

use crate::cli::DateArgs;

/// Prints the details of the requested (or today's) date.
pub fn run(args: DateArgs) -> Result<()> {
    let _cmd = info_span!("date").entered();

    let date = resolve(&args)?;
    write_details(&mut io::stdout().lock(), date)
}

fn resolve(args: &DateArgs) -> Result<CalendarDate> {
    let base = args.date.unwrap_or_else(CalendarDate::today);
    debug!(%base, "base date");
    match args.add {
        Some(days) => base
            .add_days(days)
            .with_context(|| format!("cannot add {days} days to {base}")),
        None => Ok(base),
    }
}

fn write_details(out: &mut impl Write, date: CalendarDate) -> Result<()> {
    writeln!(out, "Date:      {date}")?;
    writeln!(out, "Long form: {}", date.to_long_string())?;
    writeln!(out, "Ordinal:   {}", date.to_ordinal())?;
    writeln!(out, "Weekday:   {}", date.weekday())?;
    writeln!(
        out,
        "Leap year: {}",
        if date.is_leap_year() { "yes" } else { "no" }
    )?;
    Ok(())
}
