// src/checker/http.rs
// =============================================================================
// This module checks if URLs are alive by making HTTP requests.
//
// Key functionality:
// - Makes HTTP HEAD requests (lightweight, no body download)
// - Detects various failure modes (404, timeout, SSL errors, etc.)
// - Runs checks concurrently, with a cap on how many are in flight
// - Keeps results in the same order as the input URLs
//
// A failed probe never stops the others: every failure turns into a
// LinkCheckResult with a non-Ok status, and the caller decides what to do
// with it (the scraper lists it under `brokenLinks`).
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Enums: To represent different link states
// - Streams: For processing many items concurrently
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffered()
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::error::Error as _;
use std::time::Duration;
use tracing::debug;

// Represents the status of a link after checking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "location", rename_all = "snake_case")]
pub enum LinkStatus {
    /// Link is working (2xx after following redirects)
    Ok,
    /// Server answered 3xx and we could not follow it (no usable Location)
    Redirect(String),
    /// Link is broken (404, 410)
    Broken,
    /// Request timed out
    Timeout,
    /// SSL/TLS certificate error
    SslError,
    /// Too many redirects (redirect loop)
    TooManyRedirects,
    /// Could not resolve hostname
    DnsError,
    /// Other error (5xx, connection refused, unparseable URL, ...)
    Error,
}

// Represents the result of checking a single link
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkCheckResult {
    /// The URL that was checked, exactly as it was passed in
    pub url: String,
    #[serde(flatten)]
    pub status: LinkStatus,
    /// Optional message with more details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl LinkCheckResult {
    /// Only a successful final response counts as reachable.
    /// A redirect we could not follow is a dead end for a visitor too.
    pub fn is_ok(&self) -> bool {
        matches!(self.status, LinkStatus::Ok)
    }
}

// How the probes are run
#[derive(Debug, Clone, Copy)]
pub struct ProbeOptions {
    /// Per-request timeout
    pub timeout: Duration,
    /// Maximum number of probes in flight
    pub concurrency: usize,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            concurrency: 50,
        }
    }
}

// Checks multiple links concurrently
//
// Parameters:
//   client: shared HTTP client (its redirect policy applies to every probe)
//   urls: the links to check, duplicates included
//   options: timeout and concurrency cap
//
// Returns: one LinkCheckResult per input URL, in input order
//
// .buffered(n) runs up to n probes at once like buffer_unordered, but hands
// results back in the order the futures were created. A slow link delays
// when its result is yielded, never whether the others run.
pub async fn check_links(client: &Client, urls: Vec<String>, options: ProbeOptions) -> Vec<LinkCheckResult> {
    let concurrency = options.concurrency.max(1);

    let futures = urls.into_iter().map(|url| {
        let client = client.clone(); // Client is an Arc inside; clones share the pool
        async move { check_single_link(client, url, options.timeout).await }
    });

    stream::iter(futures)
        .buffered(concurrency)
        .collect()
        .await
}

// Picks out the URLs whose probe failed, keeping order and duplicates
pub fn broken_links(results: &[LinkCheckResult]) -> Vec<String> {
    results
        .iter()
        .filter(|r| !r.is_ok())
        .map(|r| r.url.clone())
        .collect()
}

// Checks a single link with a HEAD request
async fn check_single_link(client: Client, url: String, timeout: Duration) -> LinkCheckResult {
    let result = client.head(&url).timeout(timeout).send().await;

    let checked = match result {
        Ok(response) => analyze_response(url, response),
        Err(e) => categorize_error(url, e),
    };

    debug!(
        url = %checked.url,
        status = ?checked.status,
        message = checked.message.as_deref().unwrap_or(""),
        "probed link"
    );

    checked
}

// Analyzes an HTTP response to determine link status
//
// HTTP status codes:
// - 200-299: Success
// - 300-399: Redirect (only seen here when it could not be followed)
// - 400-499: Client error (404 not found, etc.)
// - 500-599: Server error
fn analyze_response(url: String, response: reqwest::Response) -> LinkCheckResult {
    let status_code = response.status();
    let code = status_code.as_u16();

    let (status, message) = if status_code.is_success() {
        (LinkStatus::Ok, format!("HTTP {code}"))
    } else if status_code.is_redirection() {
        // Try to get the Location header to show where it wanted to go
        let redirect_target = response
            .headers()
            .get("location")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        let message = format!("HTTP {code} -> {redirect_target}");
        (LinkStatus::Redirect(redirect_target), message)
    } else if matches!(status_code, StatusCode::NOT_FOUND | StatusCode::GONE) {
        (LinkStatus::Broken, format!("HTTP {code}"))
    } else {
        (LinkStatus::Error, format!("HTTP {code}"))
    };

    LinkCheckResult {
        url,
        status,
        message: Some(message),
    }
}

// Categorizes different error types from reqwest
//
// reqwest's top-level message is often just "error sending request", so we
// look through the whole source chain for DNS and certificate hints.
fn categorize_error(url: String, error: reqwest::Error) -> LinkCheckResult {
    let detail = error_chain(&error);

    let (status, message) = if error.is_timeout() {
        (LinkStatus::Timeout, "Request timed out".to_string())
    } else if error.is_redirect() {
        (LinkStatus::TooManyRedirects, "Too many redirects".to_string())
    } else if detail.contains("certificate") || detail.contains("ssl") || detail.contains("tls") {
        (LinkStatus::SslError, "SSL certificate error".to_string())
    } else if error.is_connect() {
        if detail.contains("dns") || detail.contains("resolve") {
            (LinkStatus::DnsError, "Could not resolve hostname".to_string())
        } else {
            (LinkStatus::Error, "Connection failed".to_string())
        }
    } else {
        (LinkStatus::Error, error.to_string())
    };

    LinkCheckResult {
        url,
        status,
        message: Some(message),
    }
}

// The error and all of its sources, lower-cased, joined with ": "
fn error_chain(error: &reqwest::Error) -> String {
    let mut text = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        text.push_str(": ");
        text.push_str(&inner.to_string());
        source = inner.source();
    }
    text.to_lowercase()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered?
//    - Both run up to N futures at the same time
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the original order, waiting for slow ones
//    - We want the same input to give the same output, so: buffered
//
// 2. Why HEAD and not GET?
//    - HEAD asks for the headers only, no body
//    - We only need the status code, so there is no point downloading pages
//
// 3. What does #[serde(flatten)] do on `status`?
//    - It merges the enum's fields into the surrounding JSON object
//    - {"url": "...", "status": "broken", "message": "HTTP 404"}
// -----------------------------------------------------------------------------
