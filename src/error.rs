use thiserror::Error;

/// Failures that end a scrape run without producing records.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("failed to connect: {0}")]
    Connect(#[source] reqwest::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("unexpected status code {0}")]
    Status(u16),

    #[error("no job listings found")]
    NoListings,
}

impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            ScrapeError::Connect(err)
        } else {
            ScrapeError::Request(err)
        }
    }
}

/// A single job card whose markup could not be read. Only that card is dropped.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("'{field}' block has no <{child}> inside")]
    MissingChild {
        field: &'static str,
        child: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum WriteError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
