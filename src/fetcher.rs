use reqwest::blocking::Client;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, HeaderMap, HeaderValue,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use tracing::debug;

use crate::config::ScrapeConfig;
use crate::error::ScrapeError;
use crate::models::SearchQuery;

const BROWSER_UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// A fetched page, whatever its status.
#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<Page, ScrapeError>;
}

/// Spaces become `+`; nothing else is escaped.
pub fn search_url(base: &str, query: &SearchQuery) -> String {
    format!(
        "{}?searchType=personalizedSearch&from=submit&txtKeywords={}&txtLocation={}",
        base,
        query.keywords.replace(' ', "+"),
        query.location.replace(' ', "+"),
    )
}

pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_UA));
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));
    headers
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &ScrapeConfig) -> Result<Self, ScrapeError> {
        // Accept-Encoding is left to reqwest so compressed bodies get decoded.
        let client = Client::builder()
            .default_headers(browser_headers())
            .timeout(config.timeout)
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<Page, ScrapeError> {
        debug!(%url, "GET");
        let resp = self.client.get(url).send()?;
        let status = resp.status().as_u16();
        let body = resp.text()?;
        debug!(status, bytes = body.len(), "response received");
        Ok(Page { status, body })
    }
}
