// src/crawl/mod.rs
// =============================================================================
// This module builds the URL list.
//
// Features:
// - Depth-first crawling starting from a URL, up to a depth limit
// - Each distinct URL is fetched at most once per crawl
// - Only URLs whose path contains the pattern end up in the results
// - Links to images, PDFs and archives are never fetched
//
// Submodules:
// - links: anchor extraction and relative URL resolution
// - filter: the path predicates
// - engine: the traversal itself
// =============================================================================

mod engine;
mod filter;
mod links;

pub use engine::{crawl, CrawlOutcome, CrawlProgress, CrawlRequest, Crawler, Silent};
pub use filter::{is_traversable, matches, SKIPPED_EXTENSIONS};
pub use links::extract_links;
