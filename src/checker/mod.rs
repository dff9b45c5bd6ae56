// src/checker/mod.rs
// =============================================================================
// This module contains the reachability prober.
//
// Submodules:
// - http: Makes HEAD requests to check if links are alive
//
// The scraper hands it the page's internal + external links and gets back one
// LinkCheckResult per link; broken_links() turns that into the `brokenLinks`
// list of the final result.
// =============================================================================

mod http;

pub use http::{broken_links, check_links, LinkCheckResult, LinkStatus, ProbeOptions};
