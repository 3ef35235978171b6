// Collaborator traits for the upstream endpoints and the local filesystem

use crate::error::Result;
use std::path::Path;

/// Source of the newest published release identifier
#[async_trait::async_trait]
pub trait LatestVersionSource: Send + Sync {
    /// The latest version as published upstream, possibly prefixed (e.g. "go1.22.5")
    async fn latest_version(&self) -> Result<String>;
}

/// Fetches a URL into a local file
#[async_trait::async_trait]
pub trait Downloader: Send + Sync {
    /// Stream `url` to `dest`, failing on transport errors and non-success statuses
    async fn download(&self, url: &str, dest: &Path) -> Result<()>;
}

/// Deletes a local file
pub trait Remover: Send + Sync {
    fn remove(&self, path: &Path) -> Result<()>;
}

/// Official digests from the release index plus local digest computation
#[async_trait::async_trait]
pub trait ChecksumProvider: Send + Sync {
    /// Expected SHA-256 for an archive filename, as published in the release index
    async fn official_checksum(&self, filename: &str) -> Result<String>;

    /// SHA-256 of a local file, lowercase hex
    fn calculate(&self, path: &Path) -> Result<String>;
}
