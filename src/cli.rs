use std::path::PathBuf;

use clap::{Parser, Subcommand};

use ticketdesk_calendar::CalendarDate;

/// Ticketdesk work ticket console.
#[derive(Parser)]
#[command(
    name = "ticketdesk",
    version,
    about = "Work tickets with Gregorian calendar arithmetic"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Run the fixed ticket demonstration.
    Demo,
    /// Enter a ticket interactively.
    Enter,
    /// Display the tickets listed in a TOML file.
    Load(LoadArgs),
    /// Show calendar details for a date.
    Date(DateArgs),
}

/// Arguments for the `load` subcommand.
#[derive(clap::Args)]
pub struct LoadArgs {
    /// Path to TOML ticket file.
    #[arg(short, long, default_value = "ticketdesk.toml")]
    pub config: PathBuf,
}

/// Arguments for the `date` subcommand.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as dd/mm/yyyy. Defaults to today.
    pub date: Option<CalendarDate>,

    /// Shift the date by this many days (negative to go back).
    #[arg(short, long, allow_negative_numbers = true)]
    pub add: Option<i64>,
}
