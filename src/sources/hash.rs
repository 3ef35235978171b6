// Hash computation utilities

use crate::error::{Error, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

const BUFFER_SIZE: usize = 64 * 1024;

/// Lowercase hex SHA-256 of in-memory data
#[cfg(test)]
pub fn sha256_hex(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Stream a file through SHA-256 and return the lowercase hex digest.
///
/// A missing path is reported as not found; a directory or a read failure
/// part-way through is an I/O error.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::io(format!("failed to open {}", path.display()), e),
    })?;

    let metadata = file
        .metadata()
        .map_err(|e| Error::io(format!("failed to stat {}", path.display()), e))?;
    if metadata.is_dir() {
        return Err(Error::io(
            format!("cannot checksum {}", path.display()),
            std::io::Error::new(ErrorKind::InvalidInput, "path is a directory"),
        ));
    }

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    loop {
        let read = file
            .read(&mut buffer)
            .map_err(|e| Error::io(format!("failed to read {}", path.display()), e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind as Kind;
    use tempfile::TempDir;

    const TEST_CONTENT_SHA256: &str =
        "6ae8a75555209fd6c44157c0aed8016e763ff435a19cf186f76863140143ff72";

    #[test]
    fn test_sha256_of_known_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("example");
        std::fs::write(&path, "test content").unwrap();

        assert_eq!(sha256_file(&path).unwrap(), TEST_CONTENT_SHA256);
        assert_eq!(sha256_hex(b"test content"), TEST_CONTENT_SHA256);
    }

    #[test]
    fn test_sha256_is_stable_across_calls() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("archive.tar.gz");
        std::fs::write(&path, vec![7u8; BUFFER_SIZE * 3 + 11]).unwrap();

        let first = sha256_file(&path).unwrap();
        let second = sha256_file(&path).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = sha256_file(&dir.path().join("non_existent_file")).unwrap_err();
        assert_eq!(err.kind(), Kind::NotFound);
    }

    #[test]
    fn test_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = sha256_file(dir.path()).unwrap_err();
        assert_eq!(err.kind(), Kind::Io);
    }

    #[test]
    fn test_removed_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gone");
        std::fs::write(&path, "x").unwrap();
        std::fs::remove_file(&path).unwrap();

        assert!(sha256_file(&path).is_err());
    }
}
