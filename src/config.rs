// Config module for endpoint and timeout settings

use crate::constants;
use std::time::Duration;

/// Runtime settings handed to the network collaborators at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub version_url: String,
    pub index_url: String,
    pub download_base: String,
    pub artifact_prefix: String,
    pub timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            version_url: constants::DEFAULT_VERSION_URL.to_string(),
            index_url: constants::DEFAULT_INDEX_URL.to_string(),
            download_base: constants::DEFAULT_DOWNLOAD_BASE.to_string(),
            artifact_prefix: constants::ARTIFACT_PREFIX.to_string(),
            timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Defaults overridden by the `GOBUMP_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut settings = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = non_empty(constants::ENV_VERSION_URL) {
            settings.version_url = url;
        }
        if let Some(url) = non_empty(constants::ENV_INDEX_URL) {
            settings.index_url = url;
        }
        if let Some(base) = non_empty(constants::ENV_DOWNLOAD_BASE) {
            settings.download_base = base;
        }
        if let Some(secs) = non_empty(constants::ENV_TIMEOUT_SECS) {
            match secs.trim().parse::<u64>() {
                Ok(0) => log::warn!(
                    "Ignoring {}=0: timeout must be at least one second",
                    constants::ENV_TIMEOUT_SECS
                ),
                Ok(secs) => settings.timeout = Duration::from_secs(secs),
                Err(_) => log::warn!(
                    "Ignoring {}={}: not a number of seconds",
                    constants::ENV_TIMEOUT_SECS,
                    secs
                ),
            }
        }
        settings
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        if let Some(timeout) = timeout {
            self.timeout = timeout;
        }
        self
    }

    /// URL of a release archive under the download base.
    pub fn artifact_url(&self, filename: &str) -> String {
        format!("{}/{}", self.download_base.trim_end_matches('/'), filename)
    }
}
