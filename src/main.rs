// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Dispatch to the appropriate subcommand handler
// 3. Print the results (and save urls.txt for `crawl`)
// 4. Exit with proper code (0 = results, 1 = nothing found, 2 = error)
// =============================================================================

mod cli;
mod interrupt;
mod report;

use anyhow::{ensure, Result};
use clap::Parser;
use std::io;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use cli::{Cli, Commands, HttpArgs};
use url_list_maker::config::CrawlConfig;
use url_list_maker::crawl::{CrawlProgress, CrawlRequest, Crawler};
use url_list_maker::fetch::{FetchError, HttpFetcher};
use url_list_maker::finder;
use url_list_maker::logging::init_logging;

const ABOUT: &str = "\
About these tools
-----------------
Builds data sources for notebook-style research tools.

URL List Maker (`url-list-maker crawl`)
  Follows the links on a page and makes a list of URLs.
  Only URLs whose path contains the given keyword are listed, so pass a
  subdirectory such as /blog/. Depth is how many links deep to follow:
  use 3 to collect the links on the pages linked from the pages the start
  page links to.

Class Name Finder (`url-list-maker find`)
  Searches a page for a keyword and shows the class name of each div that
  contains it.
";

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            report::EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}

// Returns the exit code (see report.rs); Err means exit code 2
async fn run() -> Result<i32> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Crawl {
            start_url,
            pattern,
            max_depth,
            output: output_path,
            no_save,
            json,
            http,
            delay_secs,
        } => {
            let config = CrawlConfig::from_args(http.timeout_secs, delay_secs, http.user_agent)?;
            let request = CrawlRequest::new(start_url, pattern, max_depth)?;
            let save_to = (!no_save).then_some(output_path.as_path());
            handle_crawl(&request, &config, save_to, json).await
        }
        Commands::Find { url, keyword, json, http } => handle_find(&url, &keyword, &http, json).await,
        Commands::About => {
            print!("{}", ABOUT);
            Ok(report::EXIT_FOUND)
        }
    }
}

// Prints each step as it happens, like the original spinner + log output
struct ConsoleProgress;

impl CrawlProgress for ConsoleProgress {
    fn on_visit(&mut self, url: &str, depth: usize) {
        println!("  Crawling [depth {}]: {}", depth, url);
    }

    fn on_match(&mut self, url: &str) {
        println!("  Found URL: {}", url);
    }

    fn on_failure(&mut self, url: &str, error: &FetchError) {
        eprintln!("  Warning: skipped {}: {}", url, error);
    }
}

async fn handle_crawl(request: &CrawlRequest, config: &CrawlConfig, save_to: Option<&Path>, json: bool) -> Result<i32> {
    let fetcher = HttpFetcher::new(config)?;

    let stop = Arc::new(AtomicBool::new(false));
    interrupt::install(stop.clone());

    let mut crawler = Crawler::new(request, &fetcher).with_stop_flag(stop);
    if !json {
        println!("🔍 Crawling: {}", request.start_url);
        println!("📊 Pattern: '{}', max depth: {}", request.pattern, request.max_depth);
        println!("   This may take minutes\n");
        crawler = crawler.with_progress(ConsoleProgress);
    }

    let outcome = crawler.run().await;

    report::finish_crawl(&mut io::stdout(), &mut io::stderr(), request, &outcome, save_to, json)
}

async fn handle_find(url: &str, keyword: &str, http: &HttpArgs, json: bool) -> Result<i32> {
    ensure!(
        !url.trim().is_empty() && !keyword.is_empty(),
        "please enter both a URL and a keyword"
    );

    let config = CrawlConfig::from_args(http.timeout_secs, 0, http.user_agent.clone())?;
    let fetcher = HttpFetcher::new(&config)?;

    let result = finder::search(&fetcher, url, keyword).await;
    report::finish_find(&mut io::stdout(), &mut io::stderr(), result, json)
}
