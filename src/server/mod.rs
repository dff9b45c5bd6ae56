// src/server/mod.rs
// =============================================================================
// The HTTP service around the scraper.
//
// Submodules:
// - routes: The request handlers
//
// We use axum for routing and tower-http for:
// - ServeDir: serves the small browser client from the public directory
// - TraceLayer: a tracing span per HTTP request
//
// The only shared state is one Scraper (and through it one reqwest::Client).
// Each request builds and drops its own parsed document, so handlers never
// need a lock.
// =============================================================================

mod routes;

pub use routes::{ErrorBody, HealthBody, ScrapeRequest};

use crate::scrape::Scraper;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<Scraper>,
}

impl AppState {
    pub fn new(scraper: Scraper) -> Self {
        Self {
            scraper: Arc::new(scraper),
        }
    }
}

// Builds the application router
//
// Parameters:
//   state: shared scraper
//   public_dir: directory with index.html and script.js
pub fn router(state: AppState, public_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/scrape", post(routes::scrape))
        .route("/health", get(routes::health))
        .fallback_service(ServeDir::new(public_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Binds `addr` and serves until Ctrl+C
pub async fn serve(addr: SocketAddr, state: AppState, public_dir: impl AsRef<Path>) -> std::io::Result<()> {
    let public_dir = public_dir.as_ref();
    if !public_dir.is_dir() {
        warn!(dir = %public_dir.display(), "public directory not found, only the API is served");
    }

    let listener = TcpListener::bind(addr).await?;
    info!("Server is running at http://{}", listener.local_addr()?);

    axum::serve(listener, router(state, public_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for Ctrl+C");
        // Without a signal handler, keep serving until the process is killed
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
