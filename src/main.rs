// src/main.rs
// =============================================================================
// This is the entry point of the page-scraper binary.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging (tracing-subscriber, RUST_LOG aware)
// 3. Either start the web service or scrape one page and print it
// 4. Exit with proper code (0 = success, 1 = broken links, 2 = error)
//
// The scraping itself lives in the library (src/lib.rs) so that the web
// service, this CLI and the tests all call the same code.
// =============================================================================

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use page_scraper::checker::{LinkCheckResult, LinkStatus};
use page_scraper::server::{self, AppState};
use page_scraper::{ScrapeReport, Scraper};
use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// Returns:
//   Ok(0) = success / no broken links
//   Ok(1) = broken links found (scrape subcommand only)
//   Err   = anything else (exit code 2)
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let scraper = Scraper::new(cli.options.to_config()).context("invalid scrape settings")?;

    match cli.command {
        Commands::Serve {
            host,
            port,
            public_dir,
        } => {
            handle_serve(scraper, &host, port, &public_dir).await?;
            Ok(0)
        }
        Commands::Scrape { url, json } => handle_scrape(&scraper, &url, json).await,
    }
}

// RUST_LOG wins when set; otherwise info, or debug with --verbose
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn handle_serve(scraper: Scraper, host: &str, port: u16, public_dir: &Path) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .with_context(|| format!("invalid listen address {}:{}", host, port))?;

    server::serve(addr, AppState::new(scraper), public_dir)
        .await
        .with_context(|| format!("server on {} failed", addr))
}

async fn handle_scrape(scraper: &Scraper, url: &str, json: bool) -> Result<i32> {
    // Progress goes to the log (stderr) so --json keeps stdout parseable
    info!(url, "scraping");

    let report = scraper.scrape_with_report(url).await?;

    let mut stdout = std::io::stdout().lock();
    write_report(&mut stdout, url, &report, json)?;

    if report.result.broken_links.is_empty() {
        Ok(0)
    } else {
        Ok(1)
    }
}

// With --json, stdout carries nothing but the ExtractionResult document
fn write_report(out: &mut impl Write, url: &str, report: &ScrapeReport, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, &report.result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "🔍 Scraped: {}", url)?;
        write_summary(out, report)?;
    }
    Ok(())
}

fn write_summary(out: &mut impl Write, report: &ScrapeReport) -> std::io::Result<()> {
    let result = &report.result;

    writeln!(out)?;
    writeln!(
        out,
        "📝 Meta description: {}",
        result.meta_description.as_deref().unwrap_or("(none)")
    )?;

    writeln!(out, "📑 Headings: {}", result.heading_tags.len())?;
    for heading in &result.heading_tags {
        writeln!(out, "   {}: {}", heading.tag, heading.text.trim())?;
    }

    writeln!(out, "🖼️  Images: {}", result.image_urls.len())?;
    for src in &result.image_urls {
        writeln!(out, "   {}", src.as_deref().unwrap_or("(no src)"))?;
    }

    writeln!(
        out,
        "🔗 Links: {} internal, {} external",
        result.internal_links.len(),
        result.external_links.len()
    )?;
    writeln!(out)?;

    if report.link_checks.is_empty() {
        writeln!(out, "✅ No links found to check")
    } else {
        write_table(out, &report.link_checks)
    }
}

// Probe results as a human-readable table
fn write_table(out: &mut impl Write, results: &[LinkCheckResult]) -> std::io::Result<()> {
    writeln!(out, "{:<60} {:<22} {:<30}", "URL", "STATUS", "MESSAGE")?;
    writeln!(out, "{}", "=".repeat(112))?;

    for result in results {
        let status_display = format_status(&result.status);
        let message = result.message.as_deref().unwrap_or("");
        writeln!(
            out,
            "{:<60} {:<22} {:<30}",
            truncate(&result.url, 57),
            status_display,
            message
        )?;
    }

    let ok_count = results.iter().filter(|r| r.is_ok()).count();

    writeln!(out)?;
    writeln!(out, "📊 {} checked: {} reachable, {} broken", results.len(), ok_count, results.len() - ok_count)
}

// Shortens long URLs for the table, cutting on a char boundary
fn truncate(url: &str, max_chars: usize) -> String {
    if url.chars().count() > max_chars {
        let head: String = url.chars().take(max_chars).collect();
        format!("{}...", head)
    } else {
        url.to_string()
    }
}

fn format_status(status: &LinkStatus) -> String {
    match status {
        LinkStatus::Ok => "✅ OK".to_string(),
        LinkStatus::Redirect(_) => "🔀 REDIRECT".to_string(),
        LinkStatus::Broken => "❌ BROKEN".to_string(),
        LinkStatus::Timeout => "⏱️  TIMEOUT".to_string(),
        LinkStatus::SslError => "🔒 SSL ERROR".to_string(),
        LinkStatus::TooManyRedirects => "🔁 TOO MANY REDIRECTS".to_string(),
        LinkStatus::DnsError => "🌐 DNS ERROR".to_string(),
        LinkStatus::Error => "⚠️  ERROR".to_string(),
    }
}
