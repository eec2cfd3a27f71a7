// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Each subcommand stands in for one page of the original web tool:
// - crawl: build a URL list by following links
// - find:  show which div class contains a keyword
// - about: describe the tools
// =============================================================================

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use url_list_maker::config::{DEFAULT_DELAY_SECS, DEFAULT_TIMEOUT_SECS};
use url_list_maker::output::DEFAULT_FILE_NAME;

#[derive(Parser, Debug)]
#[command(
    name = "url-list-maker",
    version,
    about = "Build URL lists by following links, and find which div holds a keyword",
    long_about = "url-list-maker follows the links on a page (up to a depth limit) and collects \
                  the URLs whose path contains a keyword, then saves them to urls.txt. \
                  It can also show which div classes on a page contain a given keyword."
)]
pub struct Cli {
    /// Print debug logs to stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Follow links from a page and list the URLs whose path contains PATTERN
    ///
    /// Example: url-list-maker crawl https://example.com/blog/ /blog/ --max-depth 2
    Crawl {
        /// Page to start from
        start_url: String,

        /// Substring the URL path must contain (e.g. a subdirectory like /blog/)
        pattern: String,

        /// How many link hops to follow
        ///
        /// Depth 1 = just the starting page
        /// Depth 2 = starting page + the pages it links to
        /// Depth 3 = ... + the pages those link to
        #[arg(long, default_value_t = 2, value_parser = RangedU64ValueParser::<usize>::new().range(1..=3))]
        max_depth: usize,

        /// Where to save the URL list
        #[arg(short, long, default_value = DEFAULT_FILE_NAME)]
        output: PathBuf,

        /// Don't save the URL list, only print it
        #[arg(long)]
        no_save: bool,

        /// Print the result as JSON instead of one URL per line
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        http: HttpArgs,

        /// Seconds to wait after each page before the next request
        #[arg(long, default_value_t = DEFAULT_DELAY_SECS)]
        delay_secs: u64,
    },

    /// Search a page for KEYWORD and show the class of each div containing it
    ///
    /// Example: url-list-maker find https://example.com/article "Chapter 1"
    Find {
        /// Page to search
        url: String,

        /// Text to look for (case-sensitive)
        keyword: String,

        /// Print the matches as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        http: HttpArgs,
    },

    /// Describe the tools
    About,
}

/// Request settings shared by subcommands that touch the network.
#[derive(clap::Args, Debug)]
pub struct HttpArgs {
    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,
}
