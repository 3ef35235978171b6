// Resolution of the "current version" from a file or a literal

use crate::error::{Error, Result};
use crate::version::extract;
use std::path::{Path, PathBuf};

/// Which input wins when both a file and a literal are supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    #[default]
    FileFirst,
    LiteralFirst,
}

/// Where the current version comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    File(PathBuf),
    Literal(String),
}

impl VersionSource {
    /// Pick the source from the caller's inputs. A blank literal counts as absent.
    pub fn select(
        file: Option<&Path>,
        literal: Option<&str>,
        precedence: Precedence,
    ) -> Result<Self> {
        let literal = literal.map(str::trim).filter(|v| !v.is_empty());

        match (file, literal, precedence) {
            (Some(_), Some(literal), Precedence::LiteralFirst) => {
                Ok(Self::Literal(literal.to_string()))
            }
            (Some(path), _, _) => Ok(Self::File(path.to_path_buf())),
            (None, Some(literal), _) => Ok(Self::Literal(literal.to_string())),
            (None, None, _) => Err(Error::NoVersionSource),
        }
    }

    pub fn resolve(&self) -> Result<String> {
        match self {
            Self::File(path) => {
                log::info!("Reading current version from {}", path.display());
                extract::read_version_from_file(path)
            }
            Self::Literal(version) => Ok(version.clone()),
        }
    }
}

/// Select and resolve in one step.
pub fn current_version(
    file: Option<&Path>,
    literal: Option<&str>,
    precedence: Precedence,
) -> Result<String> {
    VersionSource::select(file, literal, precedence)?.resolve()
}
