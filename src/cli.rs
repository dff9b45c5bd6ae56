// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - serve: run the HTTP service (POST /scrape + the browser client)
// - scrape: scrape one URL right here in the terminal
//
// The scrape settings (timeouts, concurrency, link scope) are global flags,
// so they work with either subcommand. Each flag can also come from an
// environment variable, e.g. PAGE_SCRAPER_PORT=8080.
//
// Rust concepts:
// - Derive macros: clap generates the parser from these structs
// - #[arg(env = ...)]: fall back to an environment variable
// =============================================================================

use clap::{Args, Parser, Subcommand};
use page_scraper::{LinkScope, ScrapeConfig};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(
    name = "page-scraper",
    version,
    about = "Scrape a web page for its meta description, headings, links, images and broken links",
    long_about = "page-scraper fetches one page, extracts its meta description, heading tags, \
                  internal and external links and image URLs, and checks every link for reachability. \
                  Run it as a web service with `serve` or for a single page with `scrape`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub options: ScrapeOptions,

    /// Log at debug level (RUST_LOG overrides this)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web service
    ///
    /// Example: page-scraper serve --port 3000
    Serve {
        /// Address to bind to
        #[arg(short = 'H', long, env = "PAGE_SCRAPER_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PAGE_SCRAPER_PORT", default_value_t = 3000)]
        port: u16,

        /// Directory with the browser client (index.html, script.js)
        #[arg(long, env = "PAGE_SCRAPER_PUBLIC_DIR", default_value = "public")]
        public_dir: PathBuf,
    },

    /// Scrape a single page and print the result
    ///
    /// Example: page-scraper scrape https://example.com --json
    Scrape {
        /// Page URL to scrape (e.g., https://example.com)
        url: String,

        /// Print the result as JSON (same shape as POST /scrape)
        #[arg(long)]
        json: bool,
    },
}

// Settings shared by both subcommands
#[derive(Args, Debug, Clone)]
pub struct ScrapeOptions {
    /// Seconds allowed for fetching the page
    #[arg(long, global = true, env = "PAGE_SCRAPER_FETCH_TIMEOUT", default_value_t = 10)]
    pub fetch_timeout: u64,

    /// Seconds allowed for each link probe
    #[arg(long, global = true, env = "PAGE_SCRAPER_PROBE_TIMEOUT", default_value_t = 10)]
    pub probe_timeout: u64,

    /// Seconds allowed for the whole scrape, probes included
    #[arg(long, global = true, env = "PAGE_SCRAPER_DEADLINE", default_value_t = 60)]
    pub deadline: u64,

    /// Maximum number of link probes in flight
    #[arg(long, global = true, env = "PAGE_SCRAPER_CONCURRENCY", default_value_t = 50)]
    pub concurrency: usize,

    /// How links are split into internal and external
    ///
    /// prefix: the link starts with the page URL (textual match)
    /// authority: same scheme, host and port, path under the page's path
    #[arg(long, global = true, env = "PAGE_SCRAPER_LINK_SCOPE", value_enum, default_value_t = LinkScope::Prefix)]
    pub link_scope: LinkScope,
}

impl ScrapeOptions {
    pub fn to_config(&self) -> ScrapeConfig {
        ScrapeConfig {
            fetch_timeout: Duration::from_secs(self.fetch_timeout),
            probe_timeout: Duration::from_secs(self.probe_timeout),
            deadline: Duration::from_secs(self.deadline),
            concurrency: self.concurrency,
            link_scope: self.link_scope,
            ..ScrapeConfig::default()
        }
    }
}
