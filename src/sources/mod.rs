// Sources module for the upstream endpoints and local file collaborators

use crate::config::Settings;
use crate::error::Result;
use std::sync::Arc;

pub mod downloader;
pub mod hash;
pub mod http;
pub mod latest;
pub mod release_index;
pub mod source_trait;

pub use downloader::{FsRemover, HttpDownloader};
pub use http::HttpClient;
pub use latest::UpstreamLatest;
pub use release_index::ReleaseIndex;
pub use source_trait::{ChecksumProvider, Downloader, LatestVersionSource, Remover};

/// The collaborators one invocation talks to, built once from [`Settings`].
///
/// Commands take this bundle rather than constructing clients themselves so
/// tests can swap any member for a double.
#[derive(Clone)]
pub struct Upstream {
    pub latest: Arc<dyn LatestVersionSource>,
    pub downloader: Arc<dyn Downloader>,
    pub remover: Arc<dyn Remover>,
    pub checksums: Arc<dyn ChecksumProvider>,
}

impl Upstream {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let client = HttpClient::new(settings)?;
        Ok(Self {
            latest: Arc::new(UpstreamLatest::new(client.clone(), settings)),
            downloader: Arc::new(HttpDownloader::new(client.clone())),
            remover: Arc::new(FsRemover),
            checksums: Arc::new(ReleaseIndex::new(client, settings)),
        })
    }
}
