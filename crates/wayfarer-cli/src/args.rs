use clap::{Parser, Subcommand};

/// CLI arguments for wayfarer
#[derive(Debug, Parser)]
#[command(
    name = "wayfarer",
    version,
    about = "Search travel destinations and check their local time"
)]
pub struct CliArgs {
    /// Path to the dataset (.json or .json.gz; default: the bundled travel_recommendation_api.json)
    #[arg(short = 'i', long = "input", global = true)]
    pub input: Option<String>,

    /// More log output (-v debug, -vv trace). RUST_LOG overrides this.
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show a summary of the dataset contents
    Stats,

    /// List all countries with their cities
    Countries,

    /// Search destinations by keyword (e.g. beach, temples, Japan, Tokyo)
    Search {
        /// Search term
        query: String,

        /// Print how the query was classified
        #[arg(long)]
        explain: bool,

        /// Print result cards as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the current local time at a destination
    Time {
        /// Destination display name (e.g. "Taj Mahal, India")
        name: String,

        /// Owning country, for cities
        #[arg(short = 'c', long = "country")]
        country: Option<String>,
    },

    /// Validate a contact form submission
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}
