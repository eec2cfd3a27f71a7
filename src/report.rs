// src/report.rs
// =============================================================================
// Turns finished runs into terminal output and an exit code.
//
// Exit codes:
//   0 = something was found
//   1 = ran fine, nothing matched
//   2 = error (fetch failed, urls.txt could not be written)
//
// Results are always printed before urls.txt is written, so a failed save
// never hides a finished crawl.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

use url_list_maker::crawl::{CrawlOutcome, CrawlRequest};
use url_list_maker::fetch::FetchError;
use url_list_maker::finder::ClassMatch;
use url_list_maker::output;

pub const EXIT_FOUND: i32 = 0;
pub const EXIT_NOTHING_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[derive(Serialize)]
struct CrawlReport<'a> {
    request: &'a CrawlRequest,
    #[serde(flatten)]
    outcome: &'a CrawlOutcome,
}

fn found_or_not(is_empty: bool) -> i32 {
    if is_empty {
        EXIT_NOTHING_FOUND
    } else {
        EXIT_FOUND
    }
}

/// Prints the crawl result, then saves it to `save_to` if given.
pub fn finish_crawl(
    out: &mut impl Write,
    err: &mut impl Write,
    request: &CrawlRequest,
    outcome: &CrawlOutcome,
    save_to: Option<&Path>,
    json: bool,
) -> Result<i32> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&CrawlReport { request, outcome })?)?;
    } else {
        write_crawl_results(out, outcome)?;
    }

    let code = found_or_not(outcome.matches.is_empty());
    let Some(path) = save_to else {
        return Ok(code);
    };

    match output::save_urls(path, &outcome.matches) {
        Ok(true) => {
            if !json {
                writeln!(out, "\n💾 Saved {} URL(s) to {}", outcome.matches.len(), path.display())?;
            }
            Ok(code)
        }
        Ok(false) => Ok(code),
        Err(e) => {
            writeln!(err, "Error: {:#}", e)?;
            Ok(EXIT_ERROR)
        }
    }
}

fn write_crawl_results(out: &mut impl Write, outcome: &CrawlOutcome) -> Result<()> {
    writeln!(out, "\nresults:")?;

    if outcome.cancelled {
        writeln!(out, "⚠️  Crawl cancelled, results are partial")?;
    }

    if outcome.matches.is_empty() {
        writeln!(out, "No matching URLs were found.")?;
    } else {
        writeln!(out, "{}", output::urls_text(&outcome.matches))?;
    }

    writeln!(out)?;
    writeln!(out, "📊 Summary:")?;
    writeln!(out, "   🔗 Matched: {}", outcome.matches.len())?;
    writeln!(out, "   📄 Visited: {}", outcome.visited)?;
    writeln!(out, "   ❌ Failed: {}", outcome.failed)?;
    Ok(())
}

/// Prints the keyword finder result.
pub fn finish_find(
    out: &mut impl Write,
    err: &mut impl Write,
    result: Result<Vec<ClassMatch>, FetchError>,
    json: bool,
) -> Result<i32> {
    let matches = match result {
        Ok(matches) => matches,
        Err(e) => {
            writeln!(err, "Error fetching URL: {}", e)?;
            return Ok(EXIT_ERROR);
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&matches)?)?;
    } else if matches.is_empty() {
        writeln!(out, "⚠️  Keyword not found.")?;
    } else {
        for found in &matches {
            writeln!(out, "class: {}", found.class_name)?;
            writeln!(out, "text: {}...\n", found.excerpt)?;
        }
    }

    Ok(found_or_not(matches.is_empty()))
}
