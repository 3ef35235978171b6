// Streaming archive download and local file removal

use crate::error::{Error, Result};
use crate::sources::http::HttpClient;
use crate::sources::source_trait::{Downloader, Remover};
use crate::ui;
use async_trait::async_trait;
use futures::StreamExt;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Streams a URL to disk, showing a progress bar while it runs
pub struct HttpDownloader {
    client: HttpClient,
}

impl HttpDownloader {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Downloader for HttpDownloader {
    async fn download(&self, url: &str, dest: &Path) -> Result<()> {
        let response = self.client.get(url).await?;

        if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                Error::io(format!("failed to create directory {}", parent.display()), e)
            })?;
        }

        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| Error::io(format!("failed to create {}", dest.display()), e))?;

        let name = dest
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| url.to_string());
        let pb = match response.content_length() {
            Some(total) => ui::download_bar(total),
            None => ui::download_bar_indeterminate(),
        };
        pb.set_message(name);

        let mut stream = response.bytes_stream();
        let mut written: u64 = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(source) => {
                    ui::clear_bar(&pb);
                    discard_partial(dest).await;
                    return Err(Error::Read {
                        url: url.to_string(),
                        source,
                    });
                }
            };

            if let Err(e) = file.write_all(&chunk).await {
                ui::clear_bar(&pb);
                discard_partial(dest).await;
                return Err(Error::io(format!("failed to write {}", dest.display()), e));
            }
            written += chunk.len() as u64;
            pb.set_position(written);
        }

        if let Err(e) = file.flush().await {
            ui::clear_bar(&pb);
            discard_partial(dest).await;
            return Err(Error::io(format!("failed to write {}", dest.display()), e));
        }

        ui::clear_bar(&pb);
        log::info!("Downloaded {} bytes to {}", written, dest.display());
        Ok(())
    }
}

async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        log::warn!("Could not remove partial download {}: {}", path.display(), e);
    }
}

/// Removes files from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRemover;

impl Remover for FsRemover {
    fn remove(&self, path: &Path) -> Result<()> {
        std::fs::remove_file(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::FileNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::io(format!("failed to remove {}", path.display()), e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::error::ErrorKind;
    use tempfile::TempDir;

    fn downloader() -> HttpDownloader {
        HttpDownloader::new(HttpClient::new(&Settings::default()).unwrap())
    }

    #[tokio::test]
    async fn test_download_writes_body() {
        let mut server = mockito::Server::new_async().await;
        let body = vec![42u8; 200_000];
        let mock = server
            .mock("GET", "/go/go1.22.5.linux-amd64.tar.gz")
            .with_body(body.clone())
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("nested").join("go1.22.5.linux-amd64.tar.gz");
        downloader()
            .download(
                &format!("{}/go/go1.22.5.linux-amd64.tar.gz", server.url()),
                &dest,
            )
            .await
            .unwrap();

        assert_eq!(std::fs::read(&dest).unwrap(), body);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_download_http_error_creates_nothing() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/go/missing.tar.gz")
            .with_status(404)
            .create_async()
            .await;

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("missing.tar.gz");
        let err = downloader()
            .download(&format!("{}/go/missing.tar.gz", server.url()), &dest)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::HttpStatus);
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_download_cut_short_removes_partial_file() {
        let url = crate::sources::http::serve_truncated_body(100_000, b"0123456789");

        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("go1.22.5.linux-amd64.tar.gz");
        let err = downloader().download(&url, &dest).await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Read);
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn test_download_unreachable_host() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("archive.zip");
        let err = downloader()
            .download("http://127.0.0.1:1/archive.zip", &dest)
            .await
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(!dest.exists());
    }

    #[test]
    fn test_remover_deletes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("go1.0.0.linux-amd64.tar.gz");
        std::fs::write(&path, "archive").unwrap();

        FsRemover.remove(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_remover_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = FsRemover.remove(&dir.path().join("absent")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }
}
