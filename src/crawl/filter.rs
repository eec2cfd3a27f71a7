// src/crawl/filter.rs
// =============================================================================
// URL predicates used by the crawl engine.
//
// - matches: does the URL's path contain the pattern? (recorded in results)
// - is_traversable: is the URL worth fetching at all?
//
// Both look only at the path, never at the query string or fragment.
// =============================================================================

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use url::Url;

// The bytes the URL parser escapes in a path
const PATH_ESCAPES: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Path suffixes that are never fetched. Case-sensitive.
pub const SKIPPED_EXTENSIONS: [&str; 7] = [".jpg", ".jpeg", ".png", ".gif", ".pdf", ".zip", ".rar"];

/// True iff the path of `url` contains `pattern` (plain, case-sensitive substring).
///
/// The URL parser percent-encodes non-ASCII characters in the path, so the
/// pattern is also tried encoded the same way; "/ブログ/" still matches
/// "/%E3%83%96...". Escapes already in the URL (like %2F) are never decoded.
pub fn matches(url: &str, pattern: &str) -> bool {
    let Ok(parsed) = Url::parse(url) else {
        return false;
    };

    let path = parsed.path();
    if path.contains(pattern) {
        return true;
    }

    let encoded = utf8_percent_encode(pattern, PATH_ESCAPES).to_string();
    encoded != pattern && path.contains(encoded.as_str())
}

/// True iff the path of `url` does not end in one of SKIPPED_EXTENSIONS.
pub fn is_traversable(url: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => {
            let path = parsed.path();
            !SKIPPED_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        }
        // Unparseable URLs are left to the fetcher, which rejects them
        Err(_) => true,
    }
}
