use clap::{Parser, Subcommand};
use greengraph::DEFAULT_THRESHOLD;
use std::path::PathBuf;

/// Plot the amount of green along a straight line between two places
/// on satellite maps.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Place to start measuring from.
    #[arg(short, long, default_value = "Cambridge")]
    pub begin: String,

    /// Place to finish measuring at.
    #[arg(short, long, default_value = "Oxford")]
    pub end: String,

    /// Number of equally spaced samples between the two places.
    #[arg(short, long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub steps: u32,

    /// How many times a pixel's green channel must exceed both its red
    /// and blue channels to count as green.
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f32,

    /// Satellite map zoom level.
    #[arg(short, long, default_value_t = 10)]
    pub zoom: u8,

    /// Google Maps API key.
    #[arg(long, env = "GOOGLE_MAPS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// User-Agent sent to the geocoder.
    #[arg(long, default_value = concat!("greenpath/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,

    /// Per-request timeout in seconds, 0 to wait forever.
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Save a chart of green pixels per step.
    Plot {
        /// PNG file path.
        #[arg(short, long, default_value = "graph.png")]
        out: PathBuf,
    },

    /// Print samples as CSV to stdout.
    Csv,

    /// Print samples as JSON to stdout.
    Json,

    /// Plot to terminal.
    Ascii,

    /// Save the green pixels of the map centered on a single place.
    Green {
        place: String,

        /// PNG file path.
        #[arg(short, long, default_value = "green.png")]
        out: PathBuf,
    },
}
