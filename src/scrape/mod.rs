// src/scrape/mod.rs
// =============================================================================
// This module sequences a whole scrape: fetch, parse, extract, probe.
//
// Submodules:
// - fetch: GETs the target page
// - page: Parses the HTML and runs the extractors (no network)
// - scraper: The Scraper type that ties the steps together
// =============================================================================

mod fetch;
mod page;
mod scraper;

pub use fetch::fetch_page;
pub use page::{extract_page, ExtractionResult, PageExtraction};
pub use scraper::{ScrapeReport, Scraper};
