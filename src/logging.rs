// src/logging.rs
// =============================================================================
// Diagnostic logging.
//
// Progress and results are printed directly; tracing is for diagnostics and
// goes to stderr so `--json` output on stdout stays clean.
//
// RUST_LOG controls the level (default: warn). `--verbose` forces debug.
// =============================================================================

use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    };

    // try_init: a second call (e.g. from tests) is not an error worth dying for
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();
}
