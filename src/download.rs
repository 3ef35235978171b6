// Download-and-verify pipeline for release archives
//
// Stages run strictly in order, each gating the next:
// resolve platform, fetch official checksum, download, verify.
// Only a failed verification leaves something to clean up.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::platform::Target;
use crate::sources::{ChecksumProvider, Downloader, Remover};
use crate::version;
use std::path::{Path, PathBuf};

/// Inputs for one download. Built per invocation and discarded afterwards.
pub struct DownloadConfig<'a> {
    /// Version to fetch; a prefix such as "go" is stripped.
    pub version: &'a str,
    pub os: Option<&'a str>,
    pub arch: Option<&'a str>,
    pub dest_dir: &'a Path,
    pub settings: &'a Settings,
    pub downloader: &'a dyn Downloader,
    pub remover: &'a dyn Remover,
    pub checksums: &'a dyn ChecksumProvider,
}

/// A verified archive left on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Downloaded {
    pub path: PathBuf,
    pub filename: String,
    pub digest: String,
    pub target: Target,
}

pub async fn download_and_verify(config: DownloadConfig<'_>) -> Result<Downloaded> {
    let version = version::strip_prefix(config.version);
    let target = Target::resolve(config.os, config.arch)?;
    let filename = target.archive_name(&config.settings.artifact_prefix, version);
    log::info!("Resolved archive {} for {}", filename, target);

    let expected = config.checksums.official_checksum(&filename).await?;
    log::debug!("Official checksum for {}: {}", filename, expected);

    let url = config.settings.artifact_url(&filename);
    let path = config.dest_dir.join(&filename);
    log::info!("Downloading {} to {}", url, path.display());
    config.downloader.download(&url, &path).await?;

    let actual = match config.checksums.calculate(&path) {
        Ok(actual) if actual.eq_ignore_ascii_case(&expected) => actual,
        Ok(actual) => return Err(reject(&config, &path, filename, expected, actual)),
        Err(e) => {
            let actual = format!("<unavailable: {}>", e);
            return Err(reject(&config, &path, filename, expected, actual));
        }
    };

    log::info!("Checksum verified for {}", filename);
    Ok(Downloaded {
        path,
        filename,
        digest: actual,
        target,
    })
}

/// Remove the unverified archive and build the mismatch error. A failed
/// removal is logged and never replaces the mismatch.
fn reject(
    config: &DownloadConfig<'_>,
    path: &Path,
    filename: String,
    expected: String,
    actual: String,
) -> Error {
    if let Err(e) = config.remover.remove(path) {
        log::warn!("Failed to remove unverified file {}: {}", path.display(), e);
    }
    Error::ChecksumMismatch {
        filename,
        expected,
        actual,
    }
}
