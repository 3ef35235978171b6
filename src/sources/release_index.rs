// Release index source: official SHA-256 digests per archive filename

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::sources::hash;
use crate::sources::http::HttpClient;
use crate::sources::source_trait::ChecksumProvider;
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Release {
    pub version: String,
    #[serde(default)]
    pub files: Vec<ReleaseFile>,
}

#[derive(Debug, Deserialize)]
pub struct ReleaseFile {
    pub filename: String,
    pub sha256: String,
    #[serde(default)]
    #[allow(dead_code)] // Accepted but not required by the lookup
    pub os: String,
    #[serde(default)]
    #[allow(dead_code)] // Accepted but not required by the lookup
    pub arch: String,
    #[serde(default)]
    #[allow(dead_code)] // Accepted but not required by the lookup
    pub version: String,
}

/// First digest published for `filename`, searching releases in index order.
pub fn find_checksum<'a>(releases: &'a [Release], filename: &str) -> Option<&'a str> {
    releases.iter().find_map(|release| {
        release
            .files
            .iter()
            .find(|file| file.filename == filename)
            .map(|file| {
                log::debug!("{} listed under release {}", filename, release.version);
                file.sha256.as_str()
            })
    })
}

pub fn parse_index(body: &[u8]) -> Result<Vec<Release>> {
    serde_json::from_slice(body).map_err(|e| Error::parse("release index", e))
}

/// Checksum provider backed by the upstream release index
pub struct ReleaseIndex {
    client: HttpClient,
    url: String,
}

impl ReleaseIndex {
    pub fn new(client: HttpClient, settings: &Settings) -> Self {
        Self {
            client,
            url: settings.index_url.clone(),
        }
    }
}

#[async_trait]
impl ChecksumProvider for ReleaseIndex {
    async fn official_checksum(&self, filename: &str) -> Result<String> {
        let body = self.client.fetch_bytes(&self.url).await?;
        let releases = parse_index(&body)?;
        log::debug!("Release index lists {} release(s)", releases.len());

        find_checksum(&releases, filename)
            .map(str::to_string)
            .ok_or_else(|| Error::ChecksumNotFound {
                filename: filename.to_string(),
            })
    }

    fn calculate(&self, path: &Path) -> Result<String> {
        hash::sha256_file(path)
    }
}
