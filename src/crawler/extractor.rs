//! Link extraction from HTML pages
//!
//! This module pulls anchor hyperlink targets out of an HTML document and
//! resolves them against the page's origin. Resolution is deliberately
//! simple string dispatch on the href prefix:
//!
//! - `/...` (root-relative) → concatenated onto the origin prefix
//! - `http...` (already absolute, either scheme) → kept verbatim
//! - anything else → dropped
//!
//! Known limitation: bare relative paths (`other/page`), `mailto:`,
//! `javascript:`, fragment-only `#...`, and protocol-relative `//...`
//! hrefs are all discarded rather than resolved against the page's own
//! path. Absolute `http`-prefixed links may point off-origin; the fetcher
//! filters those after extraction.

use crate::url::Origin;
use scraper::{Html, Selector};

/// Extracts anchor link targets from an HTML document
///
/// Returns the resolved targets in document order. Duplicates within one
/// page are kept; deduplication happens at the traversal layer. Malformed
/// HTML yields a best-effort partial result rather than an error, so a
/// page that cannot be parsed simply contributes fewer (possibly zero)
/// links.
///
/// # Arguments
///
/// * `html` - The HTML content of the page
/// * `origin` - The origin prefix root-relative hrefs resolve against
///
/// # Example
///
/// ```
/// use url::Url;
/// use sitemapper::Origin;
/// use sitemapper::crawler::extract_links;
///
/// let origin = Origin::of(&Url::parse("https://example.com/").unwrap()).unwrap();
/// let html = r#"<a href="/about">About</a>"#;
/// assert_eq!(extract_links(html, &origin), vec!["https://example.com/about"]);
/// ```
pub fn extract_links(html: &str, origin: &Origin) -> Vec<String> {
    let document = Html::parse_document(html);

    // The selector is a static string; a parse failure here would be a
    // programming error, but the contract is to salvage what we can.
    let selector = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(href, origin))
        .collect()
}

/// Resolves a raw href value against the page origin
///
/// Returns `None` for every form the extractor does not handle (see the
/// module docs for the list).
fn resolve_href(href: &str, origin: &Origin) -> Option<String> {
    if href.starts_with("//") {
        // Protocol-relative; not resolvable by prefix concatenation
        None
    } else if href.starts_with('/') {
        Some(origin.resolve(href))
    } else if href.starts_with("http") {
        Some(href.to_string())
    } else {
        None
    }
}
