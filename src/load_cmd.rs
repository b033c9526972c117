//! Load command: display the tickets of a TOML ticket file.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::LoadArgs;
use crate::{config, convert};

/// Reads, validates and prints every ticket in the file.
pub fn run(args: LoadArgs) -> Result<()> {
    let _cmd = info_span!("load").entered();

    info!(path = %args.config.display(), "reading ticket file");
    let file = config::load(&args.config)?;
    let tickets = convert::build_tickets(&file)?;
    info!(
        n = tickets.len(),
        open = tickets.iter().filter(|t| t.is_open()).count(),
        "tickets loaded"
    );

    let mut out = io::stdout().lock();
    for tracked in &tickets {
        writeln!(out, "{}\n", tracked.report())?;
    }
    Ok(())
}
