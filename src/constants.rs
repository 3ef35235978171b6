// Constants module for upstream endpoints and shared defaults

/// Plain-text endpoint whose first line is the latest stable release (e.g. "go1.22.5").
pub const DEFAULT_VERSION_URL: &str = "https://go.dev/VERSION?m=text";

/// JSON release index listing every release with per-file SHA-256 digests.
/// `include=all` keeps archived releases in the listing so older versions resolve.
pub const DEFAULT_INDEX_URL: &str = "https://go.dev/dl/?mode=json&include=all";

pub const DEFAULT_DOWNLOAD_BASE: &str = "https://dl.google.com/go";

/// Leading part of every archive filename: `<prefix><version>.<os>-<arch>.<ext>`.
pub const ARTIFACT_PREFIX: &str = "go";

pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

pub const ENV_VERSION_URL: &str = "GOBUMP_VERSION_URL";
pub const ENV_INDEX_URL: &str = "GOBUMP_INDEX_URL";
pub const ENV_DOWNLOAD_BASE: &str = "GOBUMP_DOWNLOAD_BASE";
pub const ENV_TIMEOUT_SECS: &str = "GOBUMP_TIMEOUT_SECS";
