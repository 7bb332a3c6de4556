use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const SEARCH_ENDPOINT: &str = "https://www.timesjobs.com/candidate/job-search.html";
pub const DEFAULT_OUTPUT_DIR: &str = "job_listings";
pub const DEFAULT_NUM_JOBS: usize = 5;

/// Scrape job listings from TimesJobs into a CSV file.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Job title to search for (prompted when omitted)
    #[arg(long)]
    pub keywords: Option<String>,

    /// Location to search in (prompted when omitted)
    #[arg(long)]
    pub location: Option<String>,

    /// Maximum number of listings to extract
    #[arg(short = 'n', long, default_value_t = DEFAULT_NUM_JOBS)]
    pub num_jobs: usize,

    /// Write to this file instead of a timestamped one
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Skip the random pause between listings
    #[arg(long)]
    pub no_delay: bool,

    /// Request timeout in seconds (none by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(long, hide = true, default_value = SEARCH_ENDPOINT)]
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub max_jobs: usize,
    pub timeout: Option<Duration>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        ScrapeConfig {
            base_url: SEARCH_ENDPOINT.into(),
            max_jobs: DEFAULT_NUM_JOBS,
            timeout: None,
        }
    }
}

impl From<&Cli> for ScrapeConfig {
    fn from(cli: &Cli) -> Self {
        ScrapeConfig {
            base_url: cli.base_url.clone(),
            max_jobs: cli.num_jobs,
            timeout: cli.timeout.map(Duration::from_secs),
        }
    }
}
