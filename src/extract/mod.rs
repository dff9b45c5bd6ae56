// src/extract/mod.rs
// =============================================================================
// This module contains everything we pull out of a parsed page.
//
// Submodules:
// - fields: meta description, headings, image URLs
// - links: internal/external link classification
//
// All functions here are pure: they take a &ParsedDocument and return owned
// data. None of them touch the network, and none of them can fail.
// =============================================================================

mod fields;
mod links;

pub use fields::{extract_heading_tags, extract_image_urls, extract_meta_description, HeadingEntry};
pub use links::{classify_links, ClassifiedLinks, LinkScope};
