// src/output.rs
// =============================================================================
// The URL list artifact.
//
// The list is saved as plain text, one URL per line, in the order the URLs
// were found. Nothing is written for an empty list.
// =============================================================================

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub const DEFAULT_FILE_NAME: &str = "urls.txt";
pub const MIME_TYPE: &str = "text/plain";

/// Newline-joined URLs, without a trailing newline.
pub fn urls_text(urls: &[String]) -> String {
    urls.join("\n")
}

/// Writes `urls` to `path`. Returns whether a file was written.
pub fn save_urls(path: &Path, urls: &[String]) -> Result<bool> {
    if urls.is_empty() {
        return Ok(false);
    }

    fs::write(path, urls_text(urls))
        .with_context(|| format!("failed to write URL list to {}", path.display()))?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urls_text() {
        let urls = vec![
            "https://example.com/blog/a".to_string(),
            "https://example.com/blog/b".to_string(),
        ];
        assert_eq!(urls_text(&urls), "https://example.com/blog/a\nhttps://example.com/blog/b");
        assert_eq!(urls_text(&[]), "");
    }

    #[test]
    fn test_save_urls_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);
        let urls = vec!["https://example.com/blog/a".to_string()];

        assert!(save_urls(&path, &urls).unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), "https://example.com/blog/a");
    }

    #[test]
    fn test_empty_list_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_FILE_NAME);

        assert!(!save_urls(&path, &[]).unwrap());
        assert!(!path.exists());
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join(DEFAULT_FILE_NAME);
        let urls = vec!["https://example.com/".to_string()];

        assert!(save_urls(&path, &urls).is_err());
    }
}
