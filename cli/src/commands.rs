pub mod poll;

use std::path::PathBuf;
use std::time::Duration;

use catisland_common::config::{Config, DEFAULT_CONCURRENCY, DEFAULT_TIMEOUT};
use clap::{ArgAction, Parser};

#[derive(Parser)]
#[command(name = "catisland")]
#[command(version)]
#[command(about = "Collects the applications deployed across a fleet of Tomcat managers.")]
pub struct CommandLine {
    /// Endpoint list, one `address;username;password` per line
    pub config_file: PathBuf,

    /// Also write the merged application list to this JSON file
    pub json_file: Option<PathBuf>,

    /// Maximum number of managers polled at once
    #[arg(short, long, default_value_t = DEFAULT_CONCURRENCY, value_parser = parse_concurrency)]
    pub concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(short, long, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Print less; repeat to hide the application listing as well
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn config(&self) -> Config {
        Config {
            concurrency: self.concurrency,
            timeout: Duration::from_secs(self.timeout),
            quiet: self.quiet,
        }
    }
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("concurrency must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(format!("invalid concurrency '{s}': {e}")),
    }
}
