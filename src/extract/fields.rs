// src/extract/fields.rs
// =============================================================================
// Extractors for the simple page fields: meta description, headings, images.
//
// Each one is a plain function over a &ParsedDocument:
// - No network access
// - No mutation of the document
// - Never fails (a missing element just means an empty/None result)
// =============================================================================

use crate::document::{self, ParsedDocument, HEADINGS, IMAGES, META_DESCRIPTION};
use serde::{Deserialize, Serialize};

// One heading element, in the order it appears on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingEntry {
    /// "h1" through "h6"
    pub tag: String,
    /// Raw text content (not trimmed)
    pub text: String,
}

// The `content` of the first <meta name="description">
//
// Only the first match counts. If it has no content attribute, the result is
// None even when a later meta description does have one.
pub fn extract_meta_description(doc: &ParsedDocument) -> Option<String> {
    doc.first(&META_DESCRIPTION)
        .and_then(|meta| document::attr(meta, "content"))
        .map(str::to_string)
}

pub fn extract_heading_tags(doc: &ParsedDocument) -> Vec<HeadingEntry> {
    doc.select(&HEADINGS)
        .map(|heading| HeadingEntry {
            tag: document::tag_name(heading),
            text: document::text_of(heading),
        })
        .collect()
}

// Every <img src> exactly as written
//
// Relative paths and data: URIs are kept as-is. An <img> without a src still
// gets an entry (None) so the list lines up with the images on the page.
pub fn extract_image_urls(doc: &ParsedDocument) -> Vec<Option<String>> {
    doc.select(&IMAGES)
        .map(|img| document::attr(img, "src").map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn heading(tag: &str, text: &str) -> HeadingEntry {
        HeadingEntry {
            tag: tag.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn test_meta_description() {
        let doc = ParsedDocument::parse(
            r#"<head><meta name="description" content="Test site"></head>"#,
        );
        assert_eq!(extract_meta_description(&doc), Some("Test site".to_string()));
    }

    #[test]
    fn test_meta_description_first_match_only() {
        let doc = ParsedDocument::parse(
            r#"<meta name="description"><meta name="description" content="second">"#,
        );
        assert_eq!(extract_meta_description(&doc), None);
    }

    #[test]
    fn test_meta_description_ignores_open_graph() {
        let doc = ParsedDocument::parse(
            r#"<meta property="og:description" content="og text">"#,
        );
        assert_eq!(extract_meta_description(&doc), None);
    }

    #[test]
    fn test_headings_keep_document_order() {
        let doc = ParsedDocument::parse(
            "<h3>Three</h3><div><h1>One</h1></div><h6>Six</h6><h2>Two</h2><h4>Four</h4><h5>Five</h5>",
        );
        assert_eq!(
            extract_heading_tags(&doc),
            vec![
                heading("h3", "Three"),
                heading("h1", "One"),
                heading("h6", "Six"),
                heading("h2", "Two"),
                heading("h4", "Four"),
                heading("h5", "Five"),
            ]
        );
    }

    #[test]
    fn test_heading_text_is_raw() {
        let doc = ParsedDocument::parse("<H1>\n  Welcome <b>home</b>\n</H1>");
        assert_eq!(
            extract_heading_tags(&doc),
            vec![heading("h1", "\n  Welcome home\n")]
        );
    }

    #[test]
    fn test_image_urls_verbatim() {
        let doc = ParsedDocument::parse(
            r#"<img src="/img/banner.jpg"><img><img src="data:image/png;base64,AAAA"><img src="https://cdn.example.com/a.gif">"#,
        );
        assert_eq!(
            extract_image_urls(&doc),
            vec![
                Some("/img/banner.jpg".to_string()),
                None,
                Some("data:image/png;base64,AAAA".to_string()),
                Some("https://cdn.example.com/a.gif".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_page() {
        let doc = ParsedDocument::parse("<p>nothing here</p>");
        assert_eq!(extract_meta_description(&doc), None);
        assert!(extract_heading_tags(&doc).is_empty());
        assert!(extract_image_urls(&doc).is_empty());
    }
}
