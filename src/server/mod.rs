use clap::Parser;
use tracing::level_filters::LevelFilter;

pub mod main;
pub mod config;
pub mod state;
pub mod models;
pub mod handlers;
pub mod server;

/// Song-of-the-day state server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file (TOML); built-in defaults apply when omitted
    #[arg(short, long)]
    pub config: Option<String>,

    /// Listen address (e.g., 0.0.0.0:8000), overrides the config file and PORT
    #[arg(short, long)]
    pub listen: Option<String>,

    /// Record file path, overrides the config file
    #[arg(short, long)]
    pub state_file: Option<String>,

    /// Log level when RUST_LOG is unset: off, error, warn, info, debug or trace
    #[arg(long, default_value = "info")]
    pub log_level: LevelFilter,
}
