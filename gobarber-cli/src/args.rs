//! Command-line arguments

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use simplelog::LevelFilter;

#[derive(Debug, Parser)]
#[command(name = "gobarber-signup", version, about = "Create a GoBarber account")]
pub struct Args {
    /// Base URL of the GoBarber API
    #[arg(long, env = "GOBARBER_API_URL", default_value = "http://localhost:3333")]
    pub api_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "GOBARBER_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Write the log here instead of the cache directory
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
