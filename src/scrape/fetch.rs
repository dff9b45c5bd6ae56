// src/scrape/fetch.rs
// =============================================================================
// Fetches the HTML of the page we were asked to scrape.
//
// This is the only step whose failure ends the whole request:
// - Invalid or non-HTTP URL
// - DNS failure, connection refused, TLS error
// - Any non-2xx status (after redirects)
// - Timeout
//
// The body is read as text whatever its Content-Type; handling non-HTML
// responses specially is out of scope.
// =============================================================================

use crate::error::FetchError;
use reqwest::Client;
use std::time::Duration;
use url::Url;

// Fetches a page and returns its body
//
// Parameters:
//   client: shared HTTP client
//   url: the page URL, exactly as the caller sent it
//   timeout: limit for the whole request, body included
pub async fn fetch_page(client: &Client, url: &str, timeout: Duration) -> Result<String, FetchError> {
    let target = Url::parse(url)?;

    if !matches!(target.scheme(), "http" | "https") {
        return Err(FetchError::UnsupportedScheme(target.scheme().to_string()));
    }

    let response = client
        .get(target)
        .timeout(timeout)
        .send()
        .await
        .map_err(|e| request_error(e, timeout))?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status().as_u16()));
    }

    let html = response.text().await.map_err(|e| request_error(e, timeout))?;
    Ok(html)
}

fn request_error(error: reqwest::Error, timeout: Duration) -> FetchError {
    if error.is_timeout() {
        FetchError::Timeout(timeout)
    } else {
        FetchError::Request(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    #[tokio::test]
    async fn test_fetch_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/page"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Hi</h1>"))
            .mount(&server)
            .await;

        let html = fetch_page(&Client::new(), &format!("{}/page", server.uri()), TIMEOUT)
            .await
            .unwrap();
        assert_eq!(html, "<h1>Hi</h1>");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = fetch_page(&Client::new(), &server.uri(), TIMEOUT).await.unwrap_err();
        assert!(matches!(err, FetchError::Status(503)));
    }

    #[tokio::test]
    async fn test_invalid_url() {
        let err = fetch_page(&Client::new(), "example.com/no-scheme", TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl(_)));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let err = fetch_page(&Client::new(), "ftp://example.com/file", TIMEOUT)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported URL scheme 'ftp'");
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let err = fetch_page(&Client::new(), "http://127.0.0.1:1/", TIMEOUT)
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }

    #[tokio::test]
    async fn test_timeout() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;

        let err = fetch_page(&Client::new(), &server.uri(), Duration::from_millis(200))
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }
}
