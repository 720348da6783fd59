//! Muatan - load goods onto a carrier and report the economics
//!
//! Reads goods from the console, loads them first-fit up to the carrier's
//! capacity, then prints value, loading cost, utilization and profit.

mod cli;
mod commands;
mod logger;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
