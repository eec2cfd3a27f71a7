// src/interrupt.rs
// =============================================================================
// Ctrl-C handling for a running crawl.
//
// First Ctrl-C: set the stop flag. The crawl ends once the page in flight
// (timeout plus pause, up to ~13s with defaults) is done, and the partial
// results are printed and saved.
// Second Ctrl-C: quit immediately with exit code 130.
// =============================================================================

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const EXIT_INTERRUPTED: i32 = 130;

// `next_signal` resolves to true for each Ctrl-C, false if signals can't be
// received; `force_quit` runs on the second one
pub async fn watch<F, Fut>(stop: Arc<AtomicBool>, mut next_signal: F, force_quit: impl FnOnce())
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    if !next_signal().await {
        return;
    }

    stop.store(true, Ordering::SeqCst);
    eprintln!("\n⏹️  Stopping after the current page (press Ctrl-C again to quit now)");

    if next_signal().await {
        force_quit();
    }
}

/// Installs the Ctrl-C handler for the whole process.
pub fn install(stop: Arc<AtomicBool>) {
    tokio::spawn(watch(
        stop,
        || async { tokio::signal::ctrl_c().await.is_ok() },
        || {
            std::process::exit(EXIT_INTERRUPTED);
        },
    ));
}
