//! CLI command definitions

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tripday")]
#[command(about = "Terminal viewer for generated travel itineraries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log parsing details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the days of an itinerary
    Days {
        /// Itinerary record (JSON) or '-' for stdin
        source: String,

        /// Read the input as plain itinerary text instead of a JSON record
        #[arg(long)]
        raw: bool,
    },

    /// Show the full plan, or a single day
    Show {
        /// Itinerary record (JSON) or '-' for stdin
        source: String,

        /// Only show the day with this number
        #[arg(short, long, value_name = "N")]
        day: Option<String>,

        /// Read the input as plain itinerary text instead of a JSON record
        #[arg(long)]
        raw: bool,

        /// Strip markdown from day content
        #[arg(long)]
        plain: bool,
    },

    /// Show the trip summary
    Summary {
        /// Itinerary record (JSON) or '-' for stdin
        source: String,

        /// Read the input as plain itinerary text; only the day count is known
        #[arg(long)]
        raw: bool,
    },

    /// Print the record with its parsed days as JSON
    Parse {
        /// Itinerary record (JSON) or '-' for stdin
        source: String,

        /// Read the input as plain itinerary text instead of a JSON record
        #[arg(long)]
        raw: bool,

        /// Emit compact JSON on a single line
        #[arg(long)]
        compact: bool,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
