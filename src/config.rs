// src/config.rs
// =============================================================================
// Crawl settings.
//
// The defaults reproduce the reference tool's behavior:
// - 10 second timeout per request
// - 3 second pause after every page that answered with a 2xx status
//
// The CLI can override both, mostly so local test sites don't take forever.
// =============================================================================

use anyhow::{ensure, Result};
use std::sync::Arc;
use std::time::Duration;

use crate::fetch::{FixedDelay, NoDelay, Throttle};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_DELAY_SECS: u64 = 3;
pub const DEFAULT_USER_AGENT: &str = concat!("url-list-maker/", env!("CARGO_PKG_VERSION"));

/// Settings shared by every request made during one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// Upper bound for a single GET, connection included
    pub timeout: Duration,
    /// Politeness pause after each answered request
    pub delay: Duration,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::from_secs(DEFAULT_DELAY_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlConfig {
    // Builds a config from the raw CLI values
    //
    // A zero timeout would make every request fail immediately, so it is
    // rejected here instead of showing up as a crawl with no results.
    pub fn from_args(timeout_secs: u64, delay_secs: u64, user_agent: Option<String>) -> Result<Self> {
        ensure!(timeout_secs > 0, "timeout must be at least 1 second");

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            delay: Duration::from_secs(delay_secs),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }

    /// The pacing strategy matching `delay`.
    pub fn throttle(&self) -> Arc<dyn Throttle> {
        if self.delay.is_zero() {
            Arc::new(NoDelay)
        } else {
            Arc::new(FixedDelay(self.delay))
        }
    }
}
