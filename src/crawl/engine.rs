// src/crawl/engine.rs
// =============================================================================
// This module implements the depth-bounded crawl.
//
// How it works:
// 1. Start with (start URL, depth 1) on a work stack
// 2. Pop an entry; drop it if it is too deep or already visited
// 3. Mark it visited *before* fetching, so no URL is ever fetched twice
// 4. Fetch it; a failure ends this branch only
// 5. Record it if its path contains the pattern
// 6. Push its traversable links at depth + 1, in reverse document order
//
// Popping LIFO with children pushed in reverse gives exactly the order a
// recursive depth-first walk would: the first anchor on a page is explored
// completely before the second one is even looked at.
//
// Requests are strictly sequential. Between steps the engine checks an
// optional stop flag, which the CLI sets on Ctrl-C.
// =============================================================================

use anyhow::{ensure, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, warn};
use url::Url;

use super::filter::{is_traversable, matches};
use super::links::extract_links;
use crate::fetch::{FetchError, PageFetcher};

/// Inputs of one crawl. Never changes while the crawl runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlRequest {
    pub start_url: String,
    pub pattern: String,
    /// The start URL is depth 1
    pub max_depth: usize,
}

impl CrawlRequest {
    pub fn new(start_url: impl Into<String>, pattern: impl Into<String>, max_depth: usize) -> Result<Self> {
        ensure!(max_depth >= 1, "max depth must be at least 1");

        Ok(Self {
            start_url: start_url.into(),
            pattern: pattern.into(),
            max_depth,
        })
    }
}

/// What a crawl produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrawlOutcome {
    /// Matching URLs in first-visit order
    pub matches: Vec<String>,
    /// Number of distinct URLs handed to the fetcher
    pub visited: usize,
    /// How many of those produced no page
    pub failed: usize,
    /// True when the stop flag cut the crawl short
    pub cancelled: bool,
}

/// Hook for showing a crawl as it happens.
///
/// Every method defaults to doing nothing.
pub trait CrawlProgress {
    fn on_visit(&mut self, _url: &str, _depth: usize) {}
    fn on_match(&mut self, _url: &str) {}
    fn on_failure(&mut self, _url: &str, _error: &FetchError) {}
}

/// Reports nothing.
#[derive(Debug, Default)]
pub struct Silent;

impl CrawlProgress for Silent {}

// One pending (url, depth) pair
#[derive(Debug)]
struct CrawlItem {
    url: String,
    depth: usize,
}

/// Runs one crawl. Owns the visited set and the result list for its lifetime.
pub struct Crawler<'a> {
    request: &'a CrawlRequest,
    fetcher: &'a dyn PageFetcher,
    progress: Box<dyn CrawlProgress + 'a>,
    stop: Option<Arc<AtomicBool>>,
    visited: HashSet<String>,
    matches: Vec<String>,
    failed: usize,
}

impl<'a> Crawler<'a> {
    pub fn new(request: &'a CrawlRequest, fetcher: &'a dyn PageFetcher) -> Self {
        Self {
            request,
            fetcher,
            progress: Box::new(Silent),
            stop: None,
            visited: HashSet::new(),
            matches: Vec::new(),
            failed: 0,
        }
    }

    pub fn with_progress(mut self, progress: impl CrawlProgress + 'a) -> Self {
        self.progress = Box::new(progress);
        self
    }

    /// Stops the crawl at the next step once `stop` is set.
    pub fn with_stop_flag(mut self, stop: Arc<AtomicBool>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub async fn run(mut self) -> CrawlOutcome {
        let mut stack = vec![CrawlItem {
            url: self.request.start_url.clone(),
            depth: 1,
        }];
        let mut cancelled = false;

        while let Some(item) = stack.pop() {
            if self.stop_requested() {
                info!(pending = stack.len() + 1, "crawl cancelled");
                cancelled = true;
                break;
            }

            if let Some(children) = self.step(item).await {
                // Reversed so the first link on the page is popped first
                stack.extend(children.into_iter().rev());
            }
        }

        CrawlOutcome {
            matches: self.matches,
            visited: self.visited.len(),
            failed: self.failed,
            cancelled,
        }
    }

    // Handles one (url, depth) pair and returns the entries to explore next
    async fn step(&mut self, item: CrawlItem) -> Option<Vec<CrawlItem>> {
        if item.depth > self.request.max_depth {
            return None;
        }

        // Check-then-insert in one call
        if !self.visited.insert(item.url.clone()) {
            return None;
        }

        debug!(url = %item.url, depth = item.depth, "visiting");
        self.progress.on_visit(&item.url, item.depth);

        let page = match self.fetcher.fetch_html(&item.url).await {
            Ok(page) => page,
            Err(error) => {
                warn!(url = %item.url, %error, "skipping branch");
                self.failed += 1;
                self.progress.on_failure(&item.url, &error);
                return None;
            }
        };

        if matches(&item.url, &self.request.pattern) {
            info!(url = %item.url, "found URL");
            self.progress.on_match(&item.url);
            self.matches.push(item.url.clone());
        }

        // Children of the deepest level would be dropped on pop anyway
        if item.depth >= self.request.max_depth {
            return None;
        }

        let base = match Url::parse(&page.url) {
            Ok(base) => base,
            Err(error) => {
                warn!(url = %page.url, %error, "cannot resolve links against page URL");
                return None;
            }
        };

        let children = extract_links(&page.body, &base)
            .into_iter()
            .filter(|link| {
                let keep = is_traversable(link);
                if !keep {
                    debug!(url = %link, "not traversable");
                }
                keep
            })
            .map(|url| CrawlItem {
                url,
                depth: item.depth + 1,
            })
            .collect();

        Some(children)
    }

    fn stop_requested(&self) -> bool {
        self.stop
            .as_ref()
            .is_some_and(|stop| stop.load(Ordering::SeqCst))
    }
}

/// Crawls `request` and returns the matching URLs in first-visit order.
///
/// Never fails: unreachable or non-HTML pages only end their own branch.
pub async fn crawl(request: &CrawlRequest, fetcher: &dyn PageFetcher) -> Vec<String> {
    Crawler::new(request, fetcher).run().await.matches
}
