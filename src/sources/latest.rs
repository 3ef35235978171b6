// Latest release lookup from the plain-text version endpoint

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::sources::http::HttpClient;
use crate::sources::source_trait::LatestVersionSource;
use async_trait::async_trait;

pub struct UpstreamLatest {
    client: HttpClient,
    url: String,
}

impl UpstreamLatest {
    pub fn new(client: HttpClient, settings: &Settings) -> Self {
        Self {
            client,
            url: settings.version_url.clone(),
        }
    }
}

#[async_trait]
impl LatestVersionSource for UpstreamLatest {
    async fn latest_version(&self) -> Result<String> {
        let body = self.client.fetch_text(&self.url).await?;
        let version = parse_version_body(&body)
            .ok_or_else(|| Error::parse("latest version response", "empty body"))?;
        log::info!("Latest upstream version: {}", version);
        Ok(version)
    }
}

/// Only the first line of the body is significant.
fn parse_version_body(body: &str) -> Option<String> {
    let first = body.trim_start().lines().next()?.trim();
    (!first.is_empty()).then(|| first.to_string())
}
