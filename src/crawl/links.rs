// src/crawl/links.rs
// =============================================================================
// This module extracts links from HTML pages.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM, tolerating broken markup the way browsers do
// - Supports CSS selectors for finding elements
//
// and the `url` crate to resolve relative hrefs against the page URL.
//
// Nothing here can fail: hrefs that don't resolve are skipped, and a page
// with mangled markup still yields whatever anchors html5ever recovered.
// =============================================================================

use scraper::{Html, Selector};
use url::Url;

// Extracts every link on a page as an absolute URL
//
// Parameters:
//   html: the HTML content to parse
//   base: the URL the page was served from (after redirects)
//
// Returns: absolute URLs in document order. Duplicates are kept; the crawl
// engine's visited set takes care of them.
//
// Example:
//   html = "<a href='/docs'>Docs</a>"
//   base = "https://example.com/page"
//   result = ["https://example.com/docs"]
pub fn extract_links(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    // "a[href]" is a constant, known-good selector
    let selector = Selector::parse("a[href]").expect("anchor selector is valid");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(base, href))
        .collect()
}

// Resolves a possibly-relative href to an absolute URL
//
// Examples (base = "https://example.com/blog/index.html"):
//   "post1"             -> "https://example.com/blog/post1"
//   "/about"            -> "https://example.com/about"
//   "#top"              -> "https://example.com/blog/index.html#top"
//   "https://other.com" -> "https://other.com/"
//   ""                  -> None
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }

    base.join(href).ok().map(|url| url.to_string())
}
