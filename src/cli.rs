use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(
    name = "tuneflow",
    about = "Search a music video catalog, build playlists and play through an external player",
    long_about = None,
    version,
)]
pub struct Args {
    /// Path to TOML config file (overrides default search: ./tuneflow.toml, ~/.config/tuneflow/config.toml)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// JSON catalog to browse instead of the built-in demo set
    #[arg(long, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Start in dark mode
    #[arg(long)]
    pub dark: bool,

    /// Start with results in list view instead of grid view
    #[arg(long)]
    pub list: bool,

    /// Simulated search latency in milliseconds [default: 500]
    #[arg(long, value_name = "MS")]
    pub search_latency_ms: Option<u64>,

    /// Simulated lyrics lookup delay in milliseconds [default: 750]
    #[arg(long, value_name = "MS")]
    pub lyrics_delay_ms: Option<u64>,

    /// Only search when Enter is pressed, not on every keystroke
    #[arg(long)]
    pub no_live_search: bool,
}
