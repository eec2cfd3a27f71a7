// src/fetch/http.rs
// =============================================================================
// This module fetches pages over HTTP.
//
// Key functionality:
// - One GET per URL with a bounded timeout
// - Non-2xx answers, timeouts and connection problems become FetchError
// - The politeness pause runs after every 2xx answer, before the body is
//   inspected, so non-HTML answers are paced too
// - The Content-Type check is a plain substring test for "text/html"
//   ("text/html; charset=utf-8" passes, "TEXT/HTML" does not)
//
// Every FetchError is non-fatal to a crawl: the engine logs it and stops
// descending that branch.
// =============================================================================

use anyhow::{Context, Result};
use futures::future::BoxFuture;
use reqwest::header::CONTENT_TYPE;
use reqwest::{redirect, Client, Response};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use url::Url;

use super::Throttle;
use crate::config::CrawlConfig;

const MAX_REDIRECTS: usize = 10;
const HTML_CONTENT_TYPE: &str = "text/html";

/// A successfully fetched document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Final URL after redirects; relative links resolve against this
    pub url: String,
    pub body: String,
}

// Why a single URL produced no page
//
// The variants carry plain strings rather than reqwest::Error so test
// fetchers can build them without a network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Not something we can GET (bad syntax, mailto:, javascript:, ...)
    #[error("unsupported URL: {0}")]
    UnsupportedUrl(String),

    #[error("request timed out")]
    Timeout,

    #[error("HTTP {0}")]
    Status(u16),

    /// The answer declared a content type other than HTML
    #[error("not an HTML document (content-type: '{0}')")]
    NotHtml(String),

    /// Connection refused, DNS failure, TLS problem, broken body...
    #[error("transport error: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            FetchError::Timeout
        } else if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else {
            FetchError::Transport(error.to_string())
        }
    }
}

/// The seam between the crawl engine and the network.
pub trait PageFetcher: Send + Sync {
    /// Fetches `url` and returns it only if it is an HTML document.
    fn fetch_html<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Page, FetchError>>;
}

/// reqwest-backed fetcher used by the CLI.
pub struct HttpFetcher {
    client: Client,
    throttle: Arc<dyn Throttle>,
}

impl HttpFetcher {
    pub fn new(config: &CrawlConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .redirect(redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self::with_client(client, config.throttle()))
    }

    pub fn with_client(client: Client, throttle: Arc<dyn Throttle>) -> Self {
        Self { client, throttle }
    }

    /// Fetches any 2xx document without pacing or a content-type check.
    ///
    /// Used by the keyword finder, which looks at a single page.
    pub async fn fetch_document(&self, url: &str) -> Result<Page, FetchError> {
        let response = self.get(url).await?;
        read_page(response).await
    }

    async fn fetch_html_page(&self, url: &str) -> Result<Page, FetchError> {
        let response = self.get(url).await?;

        self.throttle.pause().await;

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();

        if !is_html(&content_type) {
            return Err(FetchError::NotHtml(content_type));
        }

        read_page(response).await
    }

    async fn get(&self, url: &str) -> Result<Response, FetchError> {
        let parsed = Url::parse(url).map_err(|_| FetchError::UnsupportedUrl(url.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(FetchError::UnsupportedUrl(url.to_string()));
        }

        debug!(url, "GET");
        let response = self.client.get(parsed).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        Ok(response)
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_html<'a>(&'a self, url: &'a str) -> BoxFuture<'a, Result<Page, FetchError>> {
        Box::pin(self.fetch_html_page(url))
    }
}

async fn read_page(response: Response) -> Result<Page, FetchError> {
    let url = response.url().to_string();
    let body = response.text().await?;
    Ok(Page { url, body })
}

fn is_html(content_type: &str) -> bool {
    content_type.contains(HTML_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::test_server::{fetcher, reply, serve};
    use crate::fetch::NoDelay;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;
    use tokio::net::TcpListener;

    #[derive(Default)]
    struct CountingThrottle(AtomicUsize);

    impl Throttle for CountingThrottle {
        fn pause(&self) -> BoxFuture<'_, ()> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Box::pin(futures::future::ready(()))
        }
    }

    #[tokio::test]
    async fn test_fetch_html_page() {
        let base = serve(vec![(
            "/index.html",
            reply("200 OK", &[("Content-Type", "text/html; charset=utf-8")], "<p>hi</p>"),
        )])
        .await;

        let throttle = Arc::new(CountingThrottle::default());
        let fetcher = fetcher(throttle.clone(), Duration::from_secs(5));
        let page = fetcher.fetch_html(&format!("{}/index.html", base)).await.unwrap();

        assert_eq!(page.body, "<p>hi</p>");
        assert_eq!(page.url, format!("{}/index.html", base));
        assert_eq!(throttle.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_non_html_is_rejected_but_still_paced() {
        let base = serve(vec![(
            "/data.json",
            reply("200 OK", &[("Content-Type", "application/json")], "{}"),
        )])
        .await;

        let throttle = Arc::new(CountingThrottle::default());
        let fetcher = fetcher(throttle.clone(), Duration::from_secs(5));
        let result = fetcher.fetch_html(&format!("{}/data.json", base)).await;

        assert_eq!(result, Err(FetchError::NotHtml("application/json".to_string())));
        assert_eq!(throttle.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_not_html() {
        let base = serve(vec![("/bare", reply("200 OK", &[], "<p>hi</p>"))]).await;

        let fetcher = fetcher(Arc::new(NoDelay), Duration::from_secs(5));
        let result = fetcher.fetch_html(&format!("{}/bare", base)).await;

        assert_eq!(result, Err(FetchError::NotHtml(String::new())));
    }

    #[tokio::test]
    async fn test_content_type_check_is_case_sensitive() {
        let base = serve(vec![(
            "/shout",
            reply("200 OK", &[("Content-Type", "TEXT/HTML")], "<p>hi</p>"),
        )])
        .await;

        let fetcher = fetcher(Arc::new(NoDelay), Duration::from_secs(5));
        let result = fetcher.fetch_html(&format!("{}/shout", base)).await;

        assert!(matches!(result, Err(FetchError::NotHtml(_))));
    }

    #[tokio::test]
    async fn test_error_status_skips_pause() {
        let base = serve(vec![]).await;

        let throttle = Arc::new(CountingThrottle::default());
        let fetcher = fetcher(throttle.clone(), Duration::from_secs(5));
        let result = fetcher.fetch_html(&format!("{}/nowhere", base)).await;

        assert_eq!(result, Err(FetchError::Status(404)));
        assert_eq!(throttle.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_redirect_reports_final_url() {
        let base = serve(vec![
            ("/old", reply("302 Found", &[("Location", "/new/")], "")),
            (
                "/new/",
                reply("200 OK", &[("Content-Type", "text/html")], "<p>moved</p>"),
            ),
        ])
        .await;

        let fetcher = fetcher(Arc::new(NoDelay), Duration::from_secs(5));
        let page = fetcher.fetch_html(&format!("{}/old", base)).await.unwrap();

        assert_eq!(page.url, format!("{}/new/", base));
        assert_eq!(page.body, "<p>moved</p>");
    }

    #[tokio::test]
    async fn test_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and then never answer
            if let Ok((socket, _)) = listener.accept().await {
                tokio::time::sleep(Duration::from_secs(10)).await;
                drop(socket);
            }
        });

        let fetcher = fetcher(Arc::new(NoDelay), Duration::from_millis(300));
        let result = fetcher.fetch_html(&format!("http://{}/slow", addr)).await;

        assert_eq!(result, Err(FetchError::Timeout));
    }

    #[tokio::test]
    async fn test_unsupported_scheme() {
        let fetcher = fetcher(Arc::new(NoDelay), Duration::from_secs(5));

        let result = fetcher.fetch_html("mailto:someone@example.com").await;
        assert!(matches!(result, Err(FetchError::UnsupportedUrl(_))));

        let result = fetcher.fetch_html("not a url").await;
        assert!(matches!(result, Err(FetchError::UnsupportedUrl(_))));
    }

    #[tokio::test]
    async fn test_fetch_document_ignores_content_type() {
        let base = serve(vec![(
            "/plain",
            reply("200 OK", &[("Content-Type", "text/plain")], "<div>x</div>"),
        )])
        .await;

        let throttle = Arc::new(CountingThrottle::default());
        let fetcher = fetcher(throttle.clone(), Duration::from_secs(5));
        let page = fetcher.fetch_document(&format!("{}/plain", base)).await.unwrap();

        assert_eq!(page.body, "<div>x</div>");
        assert_eq!(throttle.0.load(Ordering::SeqCst), 0);
    }
}
