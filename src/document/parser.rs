// src/document/parser.rs
// =============================================================================
// A thin, read-only wrapper around scraper's HTML tree.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever, which recovers from broken markup the same way
//   browsers do (unclosed tags, stray end tags, missing <html>/<body>, ...)
//
// Parsing never fails: any input string produces some tree. Missing elements
// or attributes simply show up as None / empty results when queried.
//
// Rust concepts:
// - Lifetimes ('a): An ElementRef<'a> borrows from the document, so it can
//   never outlive the ParsedDocument it came from
// =============================================================================

use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

// An immutable, queryable HTML document
//
// There are no &mut methods: once parsed, the tree is only ever read.
pub struct ParsedDocument {
    html: Html,
}

impl ParsedDocument {
    /// Parses a full HTML document (best-effort, never fails)
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// All elements matching `selector`, in document order
    pub fn select<'a, 'b>(&'a self, selector: &'b Selector) -> Select<'a, 'b> {
        self.html.select(selector)
    }

    /// The first element matching `selector`, if any
    pub fn first<'a>(&'a self, selector: &Selector) -> Option<ElementRef<'a>> {
        self.html.select(selector).next()
    }

    /// Parser recovery messages (unexpected tokens, unclosed tags, ...)
    ///
    /// These are informational only; they never stop extraction.
    pub fn recovery_notes(&self) -> usize {
        self.html.errors.len()
    }
}

// All text inside the element, concatenated exactly as it appears
// (no trimming, descendants included)
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect()
}

// Attribute value by name, or None when the attribute is missing
pub fn attr<'a>(element: ElementRef<'a>, name: &str) -> Option<&'a str> {
    element.value().attr(name)
}

// Lower-case tag name ("h1", "a", "img", ...)
pub fn tag_name(element: ElementRef<'_>) -> String {
    element.value().name().to_ascii_lowercase()
}

// Does any descendant of `element` match `selector`?
pub fn contains(element: ElementRef<'_>, selector: &Selector) -> bool {
    element.select(selector).next().is_some()
}
