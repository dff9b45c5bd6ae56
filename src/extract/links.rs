// src/extract/links.rs
// =============================================================================
// This module finds the links on a page and sorts them into internal and
// external.
//
// For every <a> element, in document order:
// 1. Skip it if it has no href (or an empty one)
// 2. Resolve the href against the page URL ("/about" -> "https://site/about")
// 3. Skip it if it wraps an image (<a><img ...></a>)
// 4. Skip it if the href points at a file (.jpg .jpeg .png .gif .pdf)
// 5. Otherwise it is internal or external, depending on the LinkScope
//
// Duplicates are kept: two anchors pointing at the same URL produce two
// entries, because the broken-link report is per anchor, not per URL.
//
// We also use the `url` crate to:
// - Parse the base URL once
// - Resolve relative hrefs exactly like a browser does (Url::join)
// =============================================================================

use crate::document::{self, ParsedDocument, ANCHORS, IMAGES};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};
use url::Url;

// Hrefs ending in one of these extensions are downloads, not pages
static FILE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(jpg|jpeg|png|gif|pdf)$")
        .unwrap_or_else(|e| panic!("invalid file-link pattern: {e}"))
});

// How we decide whether a resolved link is internal
//
// Prefix is the historical behavior and the default. It is purely textual:
// with base "https://example.com", the link "https://example.com.evil.com/"
// also starts with the base string and is reported as internal.
//
// Authority compares the parsed URLs instead: same scheme, host and port,
// and a path at or below the base path. The evil.com link above becomes
// external under this scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum LinkScope {
    /// Resolved URL starts with the literal base URL string
    #[default]
    Prefix,
    /// Same scheme, host and port, path under the base path
    Authority,
}

// The two link lists, in document order, duplicates retained
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedLinks {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

impl ClassifiedLinks {
    /// Internal links followed by external links: the order we probe them in
    pub fn probe_list(&self) -> Vec<String> {
        self.internal
            .iter()
            .chain(self.external.iter())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.internal.len() + self.external.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Walks every anchor and classifies it
//
// Parameters:
//   doc: the parsed page
//   base_url: the URL that was requested (not any <base> tag on the page)
//   scope: how to tell internal from external
//
// Example:
//   base_url = "https://example.com"
//   <a href="/about">          -> internal "https://example.com/about"
//   <a href="https://other.com"> -> external "https://other.com/"
//   <a href="/logo.png">       -> skipped (file link)
pub fn classify_links(doc: &ParsedDocument, base_url: &str, scope: LinkScope) -> ClassifiedLinks {
    let mut links = ClassifiedLinks::default();
    let mut skipped = 0usize;

    // Parse the base URL once; every href is resolved against it
    let base = match Url::parse(base_url) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(base_url, error = %e, "base URL does not parse, hrefs are kept unresolved");
            None
        }
    };

    for anchor in doc.select(&ANCHORS) {
        let href = match document::attr(anchor, "href") {
            Some(href) if !href.is_empty() => href,
            _ => continue,
        };

        let absolute_url = resolve_url(base.as_ref(), href);

        let is_image_link = document::contains(anchor, &IMAGES);
        let is_file_link = has_file_extension(href);

        if is_image_link || is_file_link {
            skipped += 1;
            continue;
        }

        if is_internal(&absolute_url, base_url, base.as_ref(), scope) {
            links.internal.push(absolute_url);
        } else {
            links.external.push(absolute_url);
        }
    }

    debug!(
        internal = links.internal.len(),
        external = links.external.len(),
        skipped,
        "classified anchors"
    );

    links
}

// Resolves a possibly-relative href to an absolute URL string
//
// Examples (base = "https://example.com/page"):
//   "/docs"             -> "https://example.com/docs"
//   "../other"          -> "https://example.com/other"
//   "https://other.com" -> "https://other.com/"
//
// An href that cannot be resolved (or a base that never parsed) is kept
// verbatim. The anchor still gets its entry, and the probe will report it as
// broken.
fn resolve_url(base: Option<&Url>, href: &str) -> String {
    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };

    match resolved {
        Ok(url) => url.to_string(),
        Err(_) => href.to_string(),
    }
}

// Checks the raw href (before resolution), ignoring case
fn has_file_extension(href: &str) -> bool {
    FILE_LINK.is_match(href)
}

fn is_internal(absolute_url: &str, base_url: &str, base: Option<&Url>, scope: LinkScope) -> bool {
    match scope {
        LinkScope::Prefix => absolute_url.starts_with(base_url),
        LinkScope::Authority => match (base, Url::parse(absolute_url)) {
            (Some(base), Ok(candidate)) => same_authority(base, &candidate),
            _ => false,
        },
    }
}

fn same_authority(base: &Url, candidate: &Url) -> bool {
    if candidate.scheme() != base.scheme()
        || candidate.host_str() != base.host_str()
        || candidate.port_or_known_default() != base.port_or_known_default()
    {
        return false;
    }

    // "/blog" owns "/blog" and "/blog/post", but not "/blog-archive"
    let base_path = base.path();
    let path = candidate.path();
    if base_path.ends_with('/') {
        path.starts_with(base_path)
    } else {
        path == base_path
            || path
                .strip_prefix(base_path)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Url::join vs string concatenation?
//    - join follows the same rules as a browser: "../x", "?q=1", "//cdn.com/a"
//      and absolute URLs all resolve correctly
//    - Gluing strings together gets most of these wrong
//
// 2. Why is the file check done on the raw href?
//    - That is what the author wrote; resolution can add a trailing "/" or
//      percent-encoding that would change what the pattern sees
//
// 3. What is LazyLock?
//    - A value computed the first time it is used and then shared
//    - Compiling a Regex is slow-ish, so we do it once, not per anchor
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify(html: &str, base_url: &str) -> ClassifiedLinks {
        classify_links(&ParsedDocument::parse(html), base_url, LinkScope::Prefix)
    }

    #[test]
    fn test_internal_and_external() {
        let links = classify(
            r#"<a href="/about">About</a><a href="https://other.com">Other</a>"#,
            "https://example.com",
        );
        assert_eq!(links.internal, vec!["https://example.com/about"]);
        assert_eq!(links.external, vec!["https://other.com/"]);
    }

    #[test]
    fn test_resolve_relative_link() {
        let links = classify(
            r#"<a href="../other">Up</a><a href="docs">Docs</a><a href="?page=2">Next</a>"#,
            "https://example.com/section/page",
        );
        assert_eq!(
            links.external,
            vec![
                "https://example.com/other",
                "https://example.com/section/docs",
            ]
        );
        assert_eq!(links.internal, vec!["https://example.com/section/page?page=2"]);
    }

    #[test]
    fn test_skip_file_links_any_case() {
        let links = classify(
            r#"
            <a href="/logo.png">Logo</a>
            <a href="/report.PDF">Report</a>
            <a href="https://cdn.other.com/photo.JpEg">Photo</a>
            <a href="/anim.gif">Gif</a>
            <a href="/pic.jpg">Pic</a>
            <a href="/page.html">Page</a>
            "#,
            "https://example.com",
        );
        assert_eq!(links.internal, vec!["https://example.com/page.html"]);
        assert!(links.external.is_empty());
    }

    #[test]
    fn test_file_extension_must_end_the_href() {
        let links = classify(
            r#"<a href="/logo.png?size=2">Logo</a><a href="/pdf-guide">Guide</a>"#,
            "https://example.com",
        );
        assert_eq!(
            links.internal,
            vec![
                "https://example.com/logo.png?size=2",
                "https://example.com/pdf-guide",
            ]
        );
    }

    #[test]
    fn test_skip_image_wrapped_anchor() {
        let links = classify(
            r#"<a href="/home"><img src="/logo.svg"></a><a href="https://other.com/x"><div><img></div></a>"#,
            "https://example.com",
        );
        assert!(links.is_empty());
    }

    #[test]
    fn test_skip_missing_and_empty_href() {
        let links = classify(
            r#"<a name="top">Top</a><a href="">Empty</a><a href="/kept">Kept</a>"#,
            "https://example.com",
        );
        assert_eq!(links.internal, vec!["https://example.com/kept"]);
        assert!(links.external.is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let links = classify(
            r#"<a href="/a">1</a><a href="/a">2</a><a href="https://x.org/">3</a><a href="https://x.org/">4</a>"#,
            "https://example.com",
        );
        assert_eq!(links.internal, vec!["https://example.com/a", "https://example.com/a"]);
        assert_eq!(links.external, vec!["https://x.org/", "https://x.org/"]);
    }

    #[test]
    fn test_non_http_schemes_are_external() {
        let links = classify(
            r#"<a href="mailto:test@example.com">Mail</a><a href="javascript:void(0)">JS</a>"#,
            "https://example.com",
        );
        assert!(links.internal.is_empty());
        assert_eq!(links.external.len(), 2);
    }

    #[test]
    fn test_prefix_scope_is_lexical() {
        let links = classify(
            r#"<a href="https://example.com.evil.com/">Evil</a>"#,
            "https://example.com",
        );
        assert_eq!(links.internal, vec!["https://example.com.evil.com/"]);
    }

    #[test]
    fn test_authority_scope() {
        let doc = ParsedDocument::parse(
            r#"
            <a href="https://example.com.evil.com/">Evil</a>
            <a href="/blog/post">Post</a>
            <a href="/blog">Blog</a>
            <a href="/blog-archive">Archive</a>
            <a href="http://example.com/blog/post">Plain http</a>
            <a href="https://example.com:8443/blog/post">Other port</a>
            <a href="https://example.com:443/blog/x">Explicit default port</a>
            "#,
        );
        let links = classify_links(&doc, "https://example.com/blog", LinkScope::Authority);
        assert_eq!(
            links.internal,
            vec![
                "https://example.com/blog/post",
                "https://example.com/blog",
                "https://example.com/blog/x",
            ]
        );
        assert_eq!(
            links.external,
            vec![
                "https://example.com.evil.com/",
                "https://example.com/blog-archive",
                "http://example.com/blog/post",
                "https://example.com:8443/blog/post",
            ]
        );
    }

    #[test]
    fn test_unparseable_base_keeps_hrefs() {
        let links = classify(
            r#"<a href="/about">About</a><a href="https://other.com">Other</a>"#,
            "not a url",
        );
        assert!(links.internal.is_empty());
        assert_eq!(links.external, vec!["/about", "https://other.com/"]);
    }

    #[test]
    fn test_probe_list_order() {
        let links = ClassifiedLinks {
            internal: vec!["https://a/1".to_string()],
            external: vec!["https://b/1".to_string(), "https://b/2".to_string()],
        };
        assert_eq!(links.probe_list(), vec!["https://a/1", "https://b/1", "https://b/2"]);
        assert_eq!(links.len(), 3);
    }
}
