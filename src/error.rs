// Error types shared by the version, checksum, platform and download modules

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Coarse classification of an [`Error`], used by callers that only need to
/// know which stage failed and by tests asserting on failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Extraction,
    Network,
    Read,
    HttpStatus,
    Parse,
    NotFound,
    UnsupportedPlatform,
    ChecksumMismatch,
    Io,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Neither a version file nor a literal version was supplied.
    #[error("either --file (-f) or --version (-v) must be specified")]
    NoVersionSource,

    /// The version file exists in the request but could not be read.
    #[error("failed to read version file {}", path.display())]
    UnreadableInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to extract a Go version from {}", path.display())]
    VersionNotFound { path: PathBuf },

    #[error("failed to create HTTP client")]
    Client {
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("failed to read response body from {url}")]
    Read {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP request failed: {url} ({status})")]
    HttpStatus { url: String, status: StatusCode },

    #[error("failed to parse {what}: {message}")]
    Parse { what: String, message: String },

    #[error("checksum not found for {filename}")]
    ChecksumNotFound { filename: String },

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("unsupported operating system: {os}")]
    UnsupportedOs { os: String },

    #[error("unsupported architecture {arch} for OS {os}")]
    UnsupportedArch { arch: String, os: String },

    #[error("checksum mismatch: expected {expected}, got {actual} for file {filename}")]
    ChecksumMismatch {
        filename: String,
        expected: String,
        actual: String,
    },

    #[error("{message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NoVersionSource | Error::UnreadableInput { .. } => ErrorKind::Input,
            Error::VersionNotFound { .. } => ErrorKind::Extraction,
            Error::Client { .. } | Error::Network { .. } => ErrorKind::Network,
            Error::Read { .. } => ErrorKind::Read,
            Error::HttpStatus { .. } => ErrorKind::HttpStatus,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::ChecksumNotFound { .. } | Error::FileNotFound { .. } => ErrorKind::NotFound,
            Error::UnsupportedOs { .. } | Error::UnsupportedArch { .. } => {
                ErrorKind::UnsupportedPlatform
            }
            Error::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Error::Io { .. } => ErrorKind::Io,
        }
    }

    pub(crate) fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            message: message.into(),
            source,
        }
    }

    pub(crate) fn parse(what: impl Into<String>, message: impl ToString) -> Self {
        Error::Parse {
            what: what.into(),
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_groups_variants() {
        assert_eq!(Error::NoVersionSource.kind(), ErrorKind::Input);
        assert_eq!(
            Error::UnsupportedOs { os: "plan9".into() }.kind(),
            ErrorKind::UnsupportedPlatform
        );
        assert_eq!(
            Error::ChecksumNotFound {
                filename: "go1.0.0.linux-amd64.tar.gz".into()
            }
            .kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            Error::FileNotFound {
                path: PathBuf::from("missing")
            }
            .kind(),
            ErrorKind::NotFound
        );
    }

    #[test]
    fn test_checksum_mismatch_message_names_everything() {
        let err = Error::ChecksumMismatch {
            filename: "go1.16.5.linux-amd64.tar.gz".into(),
            expected: "correct-checksum".into(),
            actual: "incorrect-checksum".into(),
        };
        assert_eq!(
            err.to_string(),
            "checksum mismatch: expected correct-checksum, got incorrect-checksum for file go1.16.5.linux-amd64.tar.gz"
        );
    }
}
