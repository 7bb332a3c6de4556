mod archiver;
mod config;
mod error;
mod fetcher;
mod models;
mod pacing;
mod parser;
mod prompt;
mod scrape;
#[cfg(test)]
mod testing;

use std::io::{self, BufRead, IsTerminal, Write};

use anyhow::Result;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use config::{Cli, ScrapeConfig};
use error::ScrapeError;
use fetcher::HttpFetcher;
use models::SearchQuery;
use pacing::{NoDelay, Pacer, RandomPacer};

fn main() {
    init_tracing();

    if let Err(e) = ctrlc::set_handler(|| {
        println!();
        info!("Operation cancelled by user");
        std::process::exit(0);
    }) {
        warn!("could not install Ctrl-C handler: {e}");
    }

    let cli = Cli::parse();
    if let Err(e) = run(&cli, &mut io::stdin().lock(), &mut io::stdout()) {
        error!("An unexpected error occurred: {e:#}");
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = console_subscriber(filter, io::stdout, io::stdout().is_terminal());
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Plain progress lines: no timestamp, no target, colour only when asked for.
fn console_subscriber<W>(filter: EnvFilter, writer: W, ansi: bool) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .finish()
}

fn run<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> Result<()> {
    let query = read_query(cli, input, out)?;

    let config = ScrapeConfig::from(cli);
    let fetcher = HttpFetcher::new(&config)?;
    let mut pacer: Box<dyn Pacer> = if cli.no_delay {
        Box::new(NoDelay)
    } else {
        Box::new(RandomPacer::new())
    };

    let jobs = match scrape::scrape_jobs(&fetcher, &query, &config, pacer.as_mut()) {
        Ok(jobs) => jobs,
        Err(e) => {
            warn!("{}", describe(&e));
            return Ok(());
        }
    };

    if let Err(e) = archiver::save_to_csv(&jobs, cli.output.as_deref(), &cli.output_dir) {
        error!("Error saving to CSV: {e}");
    }
    Ok(())
}

/// Flags win over prompts. Input closing before both answers arrive is an error.
fn read_query<R: BufRead, W: Write>(cli: &Cli, input: &mut R, out: &mut W) -> io::Result<SearchQuery> {
    let mut answer = |given: &Option<String>, question: &str| -> io::Result<String> {
        match given {
            Some(v) => Ok(v.clone()),
            None => prompt::ask(&mut *input, &mut *out, question)?
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "EOF when reading a line")),
        }
    };

    let keywords = answer(&cli.keywords, "Enter job title to search for: ")?;
    let location = answer(&cli.location, "Enter location: ")?;
    Ok(SearchQuery { keywords, location })
}

fn describe(err: &ScrapeError) -> String {
    match err {
        ScrapeError::Connect(_) => {
            "Failed to connect to the website. Please check your internet connection.".into()
        }
        ScrapeError::Status(code) => format!("Failed to fetch data. Status code: {code}"),
        ScrapeError::NoListings => "No job listings found. Please try different search terms.".into(),
        ScrapeError::Request(e) => format!("An error occurred: {e}"),
    }
}
