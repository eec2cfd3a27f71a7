// src/lib.rs
// =============================================================================
// Library half of url-list-maker.
//
// - crawl: follow links from a start page and collect URLs whose path
//   contains a pattern
// - finder: report which div classes contain a keyword
// - fetch: HTTP fetching and request pacing
// - output: the urls.txt artifact
//
// The binary in main.rs is a thin CLI over these.
// =============================================================================

pub mod config;
pub mod crawl;
pub mod fetch;
pub mod finder;
pub mod logging;
pub mod output;
