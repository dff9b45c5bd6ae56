// src/scrape/scraper.rs
// =============================================================================
// The scrape pipeline for one URL.
//
// How it works:
// 1. Fetch the page (a failure here ends the request, no partial result)
// 2. Parse it once and extract every field (extract_page, no network)
// 3. Probe internal + external links concurrently
// 4. Assemble the ExtractionResult
//
// Steps 1-4 run under one overall deadline. When it fires, the pending
// future is dropped, which cancels the fetch or every in-flight probe with it.
//
// A Scraper owns one reqwest::Client and is meant to be shared: the HTTP
// server keeps a single instance and uses it for every request. Nothing in
// it is mutated after construction, so concurrent scrapes never interfere.
// =============================================================================

use crate::checker::{broken_links, check_links, LinkCheckResult, ProbeOptions};
use crate::config::ScrapeConfig;
use crate::error::{ConfigError, ScrapeError};
use crate::scrape::fetch::fetch_page;
use crate::scrape::page::{extract_page, ExtractionResult};
use reqwest::Client;
use std::time::Instant;
use tracing::{info, instrument, warn};

// The result plus the per-link probe details behind `brokenLinks`
#[derive(Debug, Clone)]
pub struct ScrapeReport {
    pub result: ExtractionResult,
    /// One entry per probed link, internal links first
    pub link_checks: Vec<LinkCheckResult>,
}

#[derive(Debug, Clone)]
pub struct Scraper {
    client: Client,
    config: ScrapeConfig,
}

impl Scraper {
    /// Validates the config and builds the shared HTTP client
    pub fn new(config: ScrapeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = config.build_client()?;
        Ok(Self { client, config })
    }

    /// Scrapes one page: Ok(result) or the reason the whole request failed
    pub async fn scrape(&self, url: &str) -> Result<ExtractionResult, ScrapeError> {
        self.scrape_with_report(url).await.map(|report| report.result)
    }

    /// Same as scrape(), but also returns each link's probe status
    #[instrument(skip(self), fields(scope = ?self.config.link_scope))]
    pub async fn scrape_with_report(&self, url: &str) -> Result<ScrapeReport, ScrapeError> {
        let limit = self.config.deadline;

        match tokio::time::timeout(limit, self.run(url)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(url, limit_secs = limit.as_secs(), "scrape deadline exceeded");
                Err(ScrapeError::DeadlineExceeded {
                    url: url.to_string(),
                    limit,
                })
            }
        }
    }

    async fn run(&self, url: &str) -> Result<ScrapeReport, ScrapeError> {
        let started = Instant::now();

        let html = fetch_page(&self.client, url, self.config.fetch_timeout)
            .await
            .map_err(|source| {
                warn!(url, error = %source, "fetch failed");
                ScrapeError::Fetch {
                    url: url.to_string(),
                    source,
                }
            })?;

        let page = extract_page(&html, url, self.config.link_scope);

        let link_checks = check_links(&self.client, page.links.probe_list(), self.probe_options()).await;
        let broken = broken_links(&link_checks);

        if !broken.is_empty() {
            warn!(url, broken = broken.len(), "page has broken links");
        }

        let result = page.into_result(broken);

        info!(
            url,
            headings = result.heading_tags.len(),
            internal = result.internal_links.len(),
            external = result.external_links.len(),
            broken = result.broken_links.len(),
            images = result.image_urls.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scrape finished"
        );

        Ok(ScrapeReport { result, link_checks })
    }

    fn probe_options(&self) -> ProbeOptions {
        ProbeOptions {
            timeout: self.config.probe_timeout,
            concurrency: self.config.concurrency,
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. How does tokio::time::timeout cancel things?
//    - It races the inner future against a timer
//    - If the timer wins, the inner future is dropped
//    - Dropping a future stops it: pending HTTP requests are abandoned
//
// 2. Why is extract_page a plain (non-async) function?
//    - scraper's Html cannot be sent between threads
//    - An async fn that holds it across .await would not be Send, and axum
//      handlers must be Send
//    - Parsing and extracting in one synchronous call avoids that entirely
// -----------------------------------------------------------------------------
