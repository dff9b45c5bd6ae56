// src/config.rs
// =============================================================================
// Runtime settings for a scrape.
//
// Every value here can come from the command line (see src/cli.rs), which in
// turn can read it from a PAGE_SCRAPER_* environment variable. Library users
// can also build a ScrapeConfig directly and start from Default.
//
// The defaults are the same ones the CLI advertises:
//   fetch timeout   10s   (getting the page we scrape)
//   probe timeout   10s   (each HEAD request for broken-link checks)
//   deadline        60s   (the whole scrape, fetch + probes)
//   concurrency     50    (probes in flight at once)
//   redirects       5     (per request)
// =============================================================================

use crate::error::ConfigError;
use crate::extract::LinkScope;
use reqwest::Client;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str = concat!("page-scraper/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Timeout for fetching the page being scraped
    pub fetch_timeout: Duration,
    /// Timeout for each reachability probe
    pub probe_timeout: Duration,
    /// Upper bound on the whole scrape, probes included
    pub deadline: Duration,
    /// How many probes may run at the same time
    pub concurrency: usize,
    /// Redirects followed before a request counts as failed
    pub max_redirects: usize,
    /// How links are split into internal and external
    pub link_scope: LinkScope,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            probe_timeout: Duration::from_secs(10),
            deadline: Duration::from_secs(60),
            concurrency: 50,
            max_redirects: 5,
            link_scope: LinkScope::Prefix,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    // Rejects settings that would make every request fail or hang
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.concurrency == 0 {
            return Err(ConfigError::Zero("concurrency"));
        }
        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::Zero("fetch timeout"));
        }
        if self.probe_timeout.is_zero() {
            return Err(ConfigError::Zero("probe timeout"));
        }
        if self.deadline.is_zero() {
            return Err(ConfigError::Zero("deadline"));
        }
        Ok(())
    }

    // Builds the one HTTP client shared by every fetch and probe
    //
    // Timeouts are set per request (fetch and probe use different ones),
    // so the client itself only carries the redirect policy and user agent.
    // reqwest::Client is an Arc inside, so cloning it is cheap and every
    // clone shares the same connection pool.
    pub fn build_client(&self) -> Result<Client, ConfigError> {
        let client = Client::builder()
            .user_agent(self.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(self.max_redirects))
            .build()?;
        Ok(client)
    }
}
