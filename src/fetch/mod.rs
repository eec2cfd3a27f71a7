// src/fetch/mod.rs
// =============================================================================
// This module gets pages off the network.
//
// Submodules:
// - http: the reqwest-backed fetcher and the FetchError taxonomy
// - throttle: the pause taken after each answered request
//
// The crawl engine only sees the PageFetcher trait, so tests can hand it an
// in-memory site instead of a real server.
// =============================================================================

mod http;
mod throttle;

#[cfg(test)]
pub(crate) mod test_server;

pub use http::{FetchError, HttpFetcher, Page, PageFetcher};
pub use throttle::{FixedDelay, NoDelay, Throttle};
