// Download command for fetching and verifying one release archive

use crate::config::Settings;
use crate::download::{DownloadConfig, Downloaded, download_and_verify};
use crate::sources::Upstream;
use crate::ui;
use anyhow::Context;
use std::path::Path;

pub async fn download(
    upstream: &Upstream,
    settings: &Settings,
    version: &str,
    os: Option<&str>,
    arch: Option<&str>,
    dest: &Path,
) -> anyhow::Result<Downloaded> {
    let downloaded = download_and_verify(DownloadConfig {
        version,
        os,
        arch,
        dest_dir: dest,
        settings,
        downloader: upstream.downloader.as_ref(),
        remover: upstream.remover.as_ref(),
        checksums: upstream.checksums.as_ref(),
    })
    .await
    .with_context(|| format!("error downloading Go {}", version))?;

    ui::success(&format!(
        "{} verified for {} (sha256 {})",
        downloaded.filename, downloaded.target, downloaded.digest
    ));
    Ok(downloaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, ErrorKind};
    use crate::sources::hash;
    use tempfile::TempDir;

    fn index_for(filename: &str, sha256: &str) -> String {
        serde_json::json!([
            {
                "version": "go1.1.0",
                "stable": true,
                "files": [{ "filename": filename, "sha256": sha256 }]
            }
        ])
        .to_string()
    }

    async fn settings_for(server: &mockito::ServerGuard) -> Settings {
        Settings {
            index_url: format!("{}/dl/", server.url()),
            download_base: format!("{}/go/", server.url()),
            ..Settings::default()
        }
    }

    #[tokio::test]
    async fn test_download_over_http() {
        let body = b"go release archive".to_vec();
        let mut server = mockito::Server::new_async().await;
        let _index = server
            .mock("GET", "/dl/")
            .with_body(index_for("go1.1.0.linux-amd64.tar.gz", &hash::sha256_hex(&body)))
            .create_async()
            .await;
        let archive = server
            .mock("GET", "/go/go1.1.0.linux-amd64.tar.gz")
            .with_body(body.clone())
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let settings = settings_for(&server).await;
        let upstream = Upstream::from_settings(&settings).unwrap();

        let downloaded = download(
            &upstream,
            &settings,
            "go1.1.0",
            Some("linux"),
            Some("amd64"),
            dir.path(),
        )
        .await
        .unwrap();

        archive.assert_async().await;
        assert_eq!(std::fs::read(&downloaded.path).unwrap(), body);
    }

    #[tokio::test]
    async fn test_mismatch_over_http_removes_archive() {
        let mut server = mockito::Server::new_async().await;
        let _index = server
            .mock("GET", "/dl/")
            .with_body(index_for("go1.1.0.linux-amd64.tar.gz", "abc123"))
            .create_async()
            .await;
        let _archive = server
            .mock("GET", "/go/go1.1.0.linux-amd64.tar.gz")
            .with_body("tampered")
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let settings = settings_for(&server).await;
        let upstream = Upstream::from_settings(&settings).unwrap();

        let err = download(
            &upstream,
            &settings,
            "1.1.0",
            Some("linux"),
            Some("amd64"),
            dir.path(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>().unwrap().kind(),
            ErrorKind::ChecksumMismatch
        );
        assert!(!dir.path().join("go1.1.0.linux-amd64.tar.gz").exists());
    }

    #[tokio::test]
    async fn test_missing_index_entry_downloads_nothing() {
        let mut server = mockito::Server::new_async().await;
        let _index = server
            .mock("GET", "/dl/")
            .with_body(index_for("go1.1.0.darwin-arm64.tar.gz", "abc123"))
            .create_async()
            .await;
        let archive = server
            .mock("GET", "/go/go1.1.0.linux-amd64.tar.gz")
            .expect(0)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let settings = settings_for(&server).await;
        let upstream = Upstream::from_settings(&settings).unwrap();

        let err = download(
            &upstream,
            &settings,
            "1.1.0",
            Some("linux"),
            Some("amd64"),
            dir.path(),
        )
        .await
        .unwrap_err();

        assert_eq!(
            err.downcast_ref::<Error>().unwrap().kind(),
            ErrorKind::NotFound
        );
        archive.assert_async().await;
    }
}
