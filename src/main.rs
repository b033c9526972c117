mod cli;
mod config;
mod convert;
mod date_cmd;
mod demo;
mod enter_cmd;
mod load_cmd;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Demo => demo::run(&mut std::io::stdout().lock()),
        Command::Enter => enter_cmd::run(),
        Command::Load(args) => load_cmd::run(args),
        Command::Date(args) => date_cmd::run(args),
    }
}
