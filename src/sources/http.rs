// Shared HTTP client utilities

use crate::config::Settings;
use crate::error::{Error, Result};
use reqwest::{Client, Response};

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("gobump/", env!("CARGO_PKG_VERSION"));

/// HTTP client carrying the configured User-Agent and request timeout
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(settings.timeout)
            .build()
            .map_err(|source| Error::Client { source })?;
        Ok(Self { client })
    }

    /// GET a URL, failing on transport errors and non-success statuses
    pub async fn get(&self, url: &str) -> Result<Response> {
        log::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Network {
                url: url.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(Error::HttpStatus {
                url: url.to_string(),
                status: response.status(),
            });
        }

        Ok(response)
    }

    /// Fetch a URL and return its body as text
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        self.get(url)
            .await?
            .text()
            .await
            .map_err(|source| Error::Read {
                url: url.to_string(),
                source,
            })
    }

    /// Fetch raw bytes from a URL
    pub async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>> {
        let bytes = self
            .get(url)
            .await?
            .bytes()
            .await
            .map_err(|source| Error::Read {
                url: url.to_string(),
                source,
            })?;
        Ok(bytes.to_vec())
    }
}

/// Serve one response that declares `declared` body bytes but sends only
/// `sent` before closing the connection. Returns the URL to request.
#[cfg(test)]
pub(crate) fn serve_truncated_body(declared: usize, sent: &'static [u8]) -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 4096];
            let _ = stream.read(&mut request);
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                declared
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(sent);
            let _ = stream.flush();
        }
    });
    format!("http://{}/truncated", addr)
}
