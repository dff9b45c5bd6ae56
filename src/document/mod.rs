// src/document/mod.rs
// =============================================================================
// This module turns raw HTML text into a tree we can query.
//
// Submodules:
// - parser: The ParsedDocument wrapper and small element helpers
// - selectors: The fixed CSS selectors every extractor uses
//
// A ParsedDocument is built once per scrape and handed to every extractor
// by shared reference (&ParsedDocument). Nothing ever re-parses the HTML.
// =============================================================================

mod parser;
mod selectors;

pub use parser::{attr, contains, tag_name, text_of, ParsedDocument};
pub use selectors::{ANCHORS, HEADINGS, IMAGES, META_DESCRIPTION};
