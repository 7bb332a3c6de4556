use scraper::Html;
use tracing::{info, warn};

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::fetcher::{PageSource, search_url};
use crate::models::{JobRecord, SearchQuery};
use crate::pacing::Pacer;
use crate::parser;

/// One GET, one parse pass. Broken cards are logged and skipped, so the result
/// may be shorter than the number of cards found, or empty.
pub fn scrape_jobs(
    source: &impl PageSource,
    query: &SearchQuery,
    config: &ScrapeConfig,
    pacer: &mut dyn Pacer,
) -> Result<Vec<JobRecord>, ScrapeError> {
    let url = search_url(&config.base_url, query);
    info!("Fetching jobs for: {} in {}", query.keywords, query.location);

    let page = source.fetch(&url)?;
    if page.status != 200 {
        return Err(ScrapeError::Status(page.status));
    }

    let doc = Html::parse_document(&page.body);
    let cards = parser::job_cards(&doc, config.max_jobs);
    if cards.is_empty() {
        return Err(ScrapeError::NoListings);
    }
    info!("Found {} job listings", cards.len());

    let total = cards.len();
    let mut jobs = Vec::with_capacity(total);
    for (index, card) in cards.into_iter().enumerate() {
        match parser::parse_card(card) {
            Ok(job) => {
                info!("Scraped: {} at {}", job.title, job.company);
                jobs.push(job);
                pacer.pause(index, total);
            }
            Err(e) => warn!("Error processing job listing: {e}"),
        }
    }
    Ok(jobs)
}
