use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{GenerateArgs, PreviewArgs};

/// Plan a trip with an itinerary-generation service
///
/// Trailhead sends your trip constraints (destination, duration, group size,
/// budget, interests and more) to a generation service and renders the
/// day-by-day itinerary, packing list and cost summary it returns.
#[derive(Parser)]
#[command(version, about, name = "trailhead")]
pub struct Args {
    /// Path to a JSON configuration file. Defaults to
    /// $XDG_CONFIG_HOME/trailhead/config.json when present
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// URL of the generation service, overriding the configuration file
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Request timeout in seconds, overriding the configuration file
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Trailhead CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate an itinerary and render it
    #[command(alias = "g")]
    Generate(GenerateArgs),
    /// Show the request that would be sent, without sending it
    #[command(alias = "p")]
    Preview(PreviewArgs),
    /// Edit the trip and submit repeatedly from a line-based session
    #[command(alias = "i")]
    Interactive,
}
