// src/error.rs
// =============================================================================
// Error types for the scraping library.
//
// There are only two ways a scrape can fail as a whole:
// - We could not fetch the page we were asked to scrape (FetchError)
// - The whole request ran past its deadline
//
// Everything else is handled locally:
// - Broken links are data (they end up in `brokenLinks`), not errors
// - Malformed HTML is parsed best-effort, never rejected
//
// The binary (src/main.rs) wraps these in anyhow::Result, the same way it
// wraps any other error on the way out.
//
// Rust concepts:
// - thiserror: Derive macro that implements std::error::Error for us
// - #[from]: Lets the ? operator convert one error type into another
// =============================================================================

use std::time::Duration;
use thiserror::Error;

// Why fetching the target page failed
#[derive(Debug, Error)]
pub enum FetchError {
    /// The URL could not be parsed at all
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// We only fetch http:// and https:// pages
    #[error("Unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    /// The server answered, but not with a 2xx status
    #[error("Request failed with status code {0}")]
    Status(u16),

    /// The request did not finish within the fetch timeout
    #[error("Timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// Connection refused, DNS failure, TLS failure, bad body, ...
    #[error("{0}")]
    Request(#[from] reqwest::Error),
}

// A request-level failure: the caller gets this instead of a result
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("Error fetching data from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },

    #[error("Scraping {url} did not finish within {}s", .limit.as_secs())]
    DeadlineExceeded { url: String, limit: Duration },
}

impl ScrapeError {
    /// True when the failure happened while fetching the target page
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, ScrapeError::Fetch { .. })
    }
}

// Invalid settings, caught before any request is made
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
