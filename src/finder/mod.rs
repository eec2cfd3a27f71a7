// src/finder/mod.rs
// =============================================================================
// Class name finder.
//
// Given a page and a keyword, reports every <div> whose visible text
// contains the keyword, together with its class attribute. Useful for
// figuring out which container holds the part of a page you care about.
//
// Matching is a plain, case-sensitive substring test. Nested divs are each
// reported, outermost first, because each of them contains the text.
// =============================================================================

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::fetch::{FetchError, HttpFetcher};

/// Characters of text kept per match.
pub const EXCERPT_CHARS: usize = 100;

/// Label used for divs without a class attribute.
pub const NO_CLASS: &str = "None";

/// One div containing the keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassMatch {
    /// Space-separated class list, or "None"
    pub class_name: String,
    /// First EXCERPT_CHARS characters of the div's text
    pub excerpt: String,
}

/// Fetches `url` and scans it for `keyword`.
pub async fn search(fetcher: &HttpFetcher, url: &str, keyword: &str) -> Result<Vec<ClassMatch>, FetchError> {
    let page = fetcher.fetch_document(url).await?;
    Ok(find_keyword(&page.body, keyword))
}

/// Scans every div of `html` for `keyword`, in document order.
pub fn find_keyword(html: &str, keyword: &str) -> Vec<ClassMatch> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("div").expect("div selector is valid");

    document
        .select(&selector)
        .filter_map(|div| {
            let text = stripped_text(div);
            if !text.contains(keyword) {
                return None;
            }

            Some(ClassMatch {
                class_name: class_label(div),
                excerpt: text.chars().take(EXCERPT_CHARS).collect(),
            })
        })
        .collect()
}

// Every text node under the element, trimmed, empty pieces dropped, glued
// together with no separator. Script and style contents are not text.
fn stripped_text(element: ElementRef) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;

            let hidden = node
                .parent()
                .and_then(|parent| parent.value().as_element().map(|el| el.name()))
                .is_some_and(|name| matches!(name, "script" | "style" | "template"));
            if hidden {
                return None;
            }

            let trimmed = text.trim();
            (!trimmed.is_empty()).then_some(trimmed)
        })
        .collect()
}

fn class_label(element: ElementRef) -> String {
    // Attribute order, not scraper's class set
    let classes: Vec<&str> = element
        .value()
        .attr("class")
        .map(|value| value.split_whitespace().collect())
        .unwrap_or_default();
    if classes.is_empty() {
        NO_CLASS.to_string()
    } else {
        classes.join(" ")
    }
}
