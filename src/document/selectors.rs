// src/document/selectors.rs
// =============================================================================
// CSS selectors shared by the extractors.
//
// Selector::parse returns a Result, but these strings are constants that are
// known to be valid, so a failure here is a programmer error. LazyLock parses
// each one the first time it is used and then reuses it for every request.
// =============================================================================

use scraper::Selector;
use std::sync::LazyLock;

fn compile(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector '{css}': {e}"))
}

/// Every <a> element, with or without href
pub static ANCHORS: LazyLock<Selector> = LazyLock::new(|| compile("a"));

/// Every <img> element
pub static IMAGES: LazyLock<Selector> = LazyLock::new(|| compile("img"));

/// h1 through h6, matched in document order
pub static HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| compile("h1, h2, h3, h4, h5, h6"));

/// <meta name="description" content="...">
pub static META_DESCRIPTION: LazyLock<Selector> =
    LazyLock::new(|| compile(r#"meta[name="description"]"#));
