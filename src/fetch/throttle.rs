// src/fetch/throttle.rs
// =============================================================================
// Request pacing.
//
// The fetcher waits a fixed amount of time after every page that answered,
// so a crawl never hammers the target server. The wait is a trait object so
// tests can swap in NoDelay and run instantly.
// =============================================================================

use futures::future::{self, BoxFuture};
use std::time::Duration;

/// Something the fetcher awaits after each answered request.
pub trait Throttle: Send + Sync {
    fn pause(&self) -> BoxFuture<'_, ()>;
}

/// Sleeps for the wrapped duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl Throttle for FixedDelay {
    fn pause(&self) -> BoxFuture<'_, ()> {
        Box::pin(tokio::time::sleep(self.0))
    }
}

/// Never waits.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Throttle for NoDelay {
    fn pause(&self) -> BoxFuture<'_, ()> {
        Box::pin(future::ready(()))
    }
}
