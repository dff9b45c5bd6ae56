// src/lib.rs
// =============================================================================
// page-scraper: fetch one web page and report what is on it.
//
// For a URL we return:
// - the meta description
// - every heading (h1-h6) in page order
// - internal and external links (file downloads and image links left out)
// - which of those links are broken
// - every image src
//
// Module layout:
// - document: HTML parsing and querying (scraper)
// - extract: the pure extractors and the link classifier
// - checker: concurrent HEAD probes for broken links
// - scrape: the pipeline that runs all of the above for one URL
// - server: the axum HTTP service (POST /scrape)
// - config, error: settings and error types
//
// Quick start:
//
//   let scraper = Scraper::new(ScrapeConfig::default())?;
//   let result = scraper.scrape("https://example.com").await?;
//   println!("{:?}", result.broken_links);
//
// Or, without any network access:
//
//   let page = extract_page(html, "https://example.com", LinkScope::Prefix);
// =============================================================================

pub mod checker;
pub mod config;
pub mod document;
pub mod error;
pub mod extract;
pub mod scrape;
pub mod server;

pub use config::ScrapeConfig;
pub use error::{ConfigError, FetchError, ScrapeError};
pub use extract::{HeadingEntry, LinkScope};
pub use scrape::{extract_page, ExtractionResult, ScrapeReport, Scraper};
