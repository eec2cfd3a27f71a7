// src/fetch/test_server.rs
// =============================================================================
// Tiny HTTP/1.1 stub for tests: answers each request by path, 404 for
// anything else, and closes the connection after every response.
// =============================================================================

use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::{HttpFetcher, Throttle};

pub fn reply(status: &str, headers: &[(&str, &str)], body: &str) -> String {
    let mut out = format!("HTTP/1.1 {}\r\n", status);
    for (name, value) in headers {
        out.push_str(&format!("{}: {}\r\n", name, value));
    }
    out.push_str(&format!(
        "Content-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    ));
    out
}

/// Starts the stub and returns its base URL (no trailing slash).
pub async fn serve(routes: Vec<(&'static str, String)>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move {
                let mut buf = vec![0u8; 8192];
                let n = socket.read(&mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy(&buf[..n]).to_string();
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let response = routes
                    .iter()
                    .find(|(route, _)| *route == path)
                    .map(|(_, response)| response.clone())
                    .unwrap_or_else(|| reply("404 Not Found", &[], "missing"));

                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    format!("http://{}", addr)
}

/// A fetcher that talks to the stub directly, ignoring any proxy settings.
pub fn fetcher(throttle: Arc<dyn Throttle>, timeout: Duration) -> HttpFetcher {
    let client = Client::builder()
        .timeout(timeout)
        .no_proxy()
        .build()
        .unwrap();
    HttpFetcher::with_client(client, throttle)
}
