// src/scrape/page.rs
// =============================================================================
// The network-free half of a scrape: HTML text in, extracted fields out.
//
// extract_page() parses the HTML once and runs every extractor against that
// one document. The ParsedDocument lives only inside this function, so the
// async code around it never holds the tree across an .await.
//
// ExtractionResult is what callers finally get back. Its JSON field names
// (metaDescription, headingTags, ...) are the wire format of POST /scrape.
// =============================================================================

use crate::document::ParsedDocument;
use crate::extract::{
    classify_links, extract_heading_tags, extract_image_urls, extract_meta_description,
    ClassifiedLinks, HeadingEntry, LinkScope,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

// Everything extracted from one page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Left out of the JSON entirely when the page has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    pub heading_tags: Vec<HeadingEntry>,
    pub internal_links: Vec<String>,
    pub external_links: Vec<String>,
    /// Entries of internal_links + external_links whose probe failed
    pub broken_links: Vec<String>,
    /// `null` for an <img> without src
    pub image_urls: Vec<Option<String>>,
}

// The extracted fields before any link has been probed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageExtraction {
    pub meta_description: Option<String>,
    pub heading_tags: Vec<HeadingEntry>,
    pub links: ClassifiedLinks,
    pub image_urls: Vec<Option<String>>,
}

impl PageExtraction {
    /// Attaches the probe outcome and produces the final result
    pub fn into_result(self, broken_links: Vec<String>) -> ExtractionResult {
        ExtractionResult {
            meta_description: self.meta_description,
            heading_tags: self.heading_tags,
            internal_links: self.links.internal,
            external_links: self.links.external,
            broken_links,
            image_urls: self.image_urls,
        }
    }
}

// Parses `html` once and runs every extractor on it
//
// Parameters:
//   html: the page body
//   base_url: the URL the page was requested from
//   scope: internal/external rule for links
pub fn extract_page(html: &str, base_url: &str, scope: LinkScope) -> PageExtraction {
    let doc = ParsedDocument::parse(html);

    let notes = doc.recovery_notes();
    if notes > 0 {
        debug!(base_url, notes, "HTML needed error recovery");
    }

    PageExtraction {
        meta_description: extract_meta_description(&doc),
        heading_tags: extract_heading_tags(&doc),
        links: classify_links(&doc, base_url, scope),
        image_urls: extract_image_urls(&doc),
    }
}
