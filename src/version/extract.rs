// Version extraction from free-form project files

use crate::error::{Error, Result};
use regex::Regex;
use std::path::Path;

/// Keys looked up, in order, when the input parses as a structured document.
pub const VERSION_KEYS: &[&str] = &[
    "go_version",
    "goVersion",
    "golang_version",
    "golangVersion",
    "GO_VERSION",
    "GOLANG_VERSION",
];

type Strategy = fn(&str) -> Option<String>;

/// Detection strategies in priority order; the first hit wins.
const STRATEGIES: &[(&str, Strategy)] = &[
    ("structured data", from_structured),
    ("go directive", from_go_directive),
    ("text pattern", from_patterns),
];

lazy_static::lazy_static! {
    /// Fallback patterns, tried in order. Each yields its FIRST match in
    /// document order; capture group 1 is the version.
    static ref PATTERNS: Vec<Regex> = [
        // go: 1.21, golang_version = "1.21.3", GO_VERSION=1.22, go version 1.20
        r#"(?i)\b(?:go|golang|go_version|golang_version)(?:[\s_-]*version)?["']?\s*[:=]?\s*["']?v?(\d+\.\d+(?:\.\d+)?)"#,
        // FROM golang:1.21-alpine, FROM docker.io/library/golang:1.21
        r"(?im)^\s*FROM\s+(?:\S+/)?golang:v?(\d+\.\d+(?:\.\d+)?)",
        // ARG GO_VERSION=1.21.3
        r#"(?im)^\s*ARG\s+(?:GO_VERSION|GOLANG_VERSION)=["']?v?(\d+\.\d+(?:\.\d+)?)"#,
        // ENV GO_VERSION=1.21.3, ENV GOLANG_VERSION 1.21.3
        r#"(?im)^\s*ENV\s+(?:GO_VERSION|GOLANG_VERSION)[=\s]\s*["']?v?(\d+\.\d+(?:\.\d+)?)"#,
        // go1.21.3, golang1.20
        r"(?i)\b[a-z]+(\d+\.\d+(?:\.\d+)?)",
        // any dotted number
        r"(\d+\.\d+(?:\.\d+)?)",
    ]
    .iter()
    .filter_map(|pattern| match Regex::new(pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            log::error!("Invalid version pattern {}: {}", pattern, e);
            None
        }
    })
    .collect();
}

/// Find a Go version embedded in `content`.
///
/// Returns `None` when no strategy recognises a version; a found version is
/// never empty.
pub fn extract_version(content: &str) -> Option<String> {
    STRATEGIES.iter().find_map(|(name, strategy)| {
        let found = strategy(content)?;
        log::debug!("Version {} found via {}", found, name);
        Some(found)
    })
}

/// Read `path` and extract the version it pins.
pub fn read_version_from_file(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::UnreadableInput {
        path: path.to_path_buf(),
        source,
    })?;
    let content = String::from_utf8_lossy(&bytes);

    extract_version(&content).ok_or_else(|| Error::VersionNotFound {
        path: path.to_path_buf(),
    })
}

/// JSON, then TOML, then YAML; only documents whose top level is a mapping
/// are considered, and only non-empty string values count.
fn from_structured(content: &str) -> Option<String> {
    if let Ok(map) = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(content) {
        return VERSION_KEYS
            .iter()
            .find_map(|key| map.get(*key).and_then(|v| v.as_str()).and_then(non_empty));
    }

    if let Ok(table) = toml::from_str::<toml::Table>(content) {
        return VERSION_KEYS
            .iter()
            .find_map(|key| table.get(*key).and_then(|v| v.as_str()).and_then(non_empty));
    }

    if let Ok(mapping) = serde_yaml::from_str::<serde_yaml::Mapping>(content) {
        return VERSION_KEYS.iter().find_map(|key| {
            mapping
                .get(*key)
                .and_then(|v| v.as_str())
                .and_then(non_empty)
        });
    }

    None
}

/// go.mod style: the first line starting with `go ` carries the version.
fn from_go_directive(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.strip_prefix("go "))
        .find_map(non_empty)
}

fn from_patterns(content: &str) -> Option<String> {
    PATTERNS.iter().find_map(|re| {
        re.captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    })
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}
