//! CLI definition using clap

use clap::{Parser, Subcommand};
use muatan_types::OutputFormat;

#[derive(Parser)]
#[command(name = "muatan")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Load goods onto a carrier and compute value, cost and profit")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output (debug logs on stderr)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run an interactive loading session (default)
    Load {
        /// Carrier capacity in kg for this run
        #[arg(long)]
        capacity: Option<f64>,

        /// Worker fee per kg for this run
        #[arg(long)]
        rate: Option<f64>,

        /// Worker name for this run
        #[arg(long)]
        worker: Option<String>,

        /// Carrier type for this run
        #[arg(long)]
        carrier: Option<String>,

        /// Print the unit price of every loaded good
        #[arg(long)]
        show_prices: bool,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default carrier capacity (kg)
        #[arg(long)]
        set_capacity: Option<f64>,

        /// Set default worker fee per kg
        #[arg(long)]
        set_rate: Option<f64>,

        /// Set default worker name
        #[arg(long)]
        set_worker: Option<String>,

        /// Set default carrier type
        #[arg(long)]
        set_carrier: Option<String>,

        /// Set currency label
        #[arg(long)]
        set_currency: Option<String>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,
    },
}
