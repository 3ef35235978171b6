// Version comparison for dotted release identifiers

use std::cmp::Ordering;
use std::fmt;

/// Numeric components of a version with any non-numeric prefix removed.
///
/// Ordering is lexicographic over the components, so a version that extends
/// another with extra components sorts after it ("1.17.10" > "1.17").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Version {
    components: Vec<u64>,
}

impl Version {
    /// Best-effort parse. Components that are empty or not numeric become 0;
    /// an empty (or prefix-only) input has no components at all.
    pub fn parse(raw: &str) -> Self {
        let stripped = strip_prefix(raw);
        if stripped.is_empty() {
            return Self::default();
        }

        let components = stripped
            .split('.')
            .map(|part| {
                part.parse::<u64>().unwrap_or_else(|_| {
                    log::debug!("Version component '{}' of '{}' read as 0", part, raw);
                    0
                })
            })
            .collect();

        Self { components }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Strip everything before the first ASCII digit ("go1.21" -> "1.21",
/// "v2.0" -> "2.0") and surrounding whitespace.
pub fn strip_prefix(raw: &str) -> &str {
    raw.trim().trim_start_matches(|c: char| !c.is_ascii_digit())
}

/// Whether `latest` is strictly newer than `current`.
///
/// Emptiness is judged after the prefix is stripped: a version with no digits
/// ("", "go", "beta") has no components. Such a `latest` is never newer, and
/// any `latest` with components is newer than such a `current`. Comparing
/// parsed components on both sides keeps the ordering strict.
pub fn is_newer(latest: &str, current: &str) -> bool {
    Version::parse(latest).cmp(&Version::parse(current)) == Ordering::Greater
}
