//! Target platform resolution for release archives.
//!
//! Normalises an optional OS / architecture pair against the fixed support
//! matrix of published Go archives and derives the archive extension.
//!
//! | OS        | Architectures                  |
//! |-----------|--------------------------------|
//! | `windows` | `386`, `amd64`, `arm64`        |
//! | `linux`   | `386`, `amd64`, `arm64`, `armv6l` |
//! | `darwin`  | `amd64`, `arm64`               |

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Os {
    Windows,
    Linux,
    Darwin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86,
    Amd64,
    Arm64,
    Armv6l,
}

impl Os {
    /// Name used in archive filenames.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Windows => "windows",
            Self::Linux => "linux",
            Self::Darwin => "darwin",
        }
    }

    pub fn supported_arches(self) -> &'static [Arch] {
        match self {
            Self::Windows => &[Arch::X86, Arch::Amd64, Arch::Arm64],
            Self::Linux => &[Arch::X86, Arch::Amd64, Arch::Arm64, Arch::Armv6l],
            Self::Darwin => &[Arch::Amd64, Arch::Arm64],
        }
    }

    pub fn archive_extension(self) -> &'static str {
        match self {
            Self::Windows => "zip",
            Self::Linux | Self::Darwin => "tar.gz",
        }
    }

    /// The operating system this binary runs on, in archive naming.
    pub fn host() -> Result<Self> {
        std::env::consts::OS.parse()
    }
}

impl Arch {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::X86 => "386",
            Self::Amd64 => "amd64",
            Self::Arm64 => "arm64",
            Self::Armv6l => "armv6l",
        }
    }

    /// Rust's name for the host architecture ("x86_64", "aarch64", ...).
    fn host_name() -> &'static str {
        std::env::consts::ARCH
    }

    fn parse_for(s: &str, os: Os) -> Result<Self> {
        let arch = match s.trim().to_lowercase().as_str() {
            "386" | "x86" | "i386" | "i686" => Some(Self::X86),
            "amd64" | "x86_64" => Some(Self::Amd64),
            "arm64" | "aarch64" => Some(Self::Arm64),
            "armv6l" | "armv6" | "arm" => Some(Self::Armv6l),
            _ => None,
        };

        arch.filter(|a| os.supported_arches().contains(a))
            .ok_or_else(|| Error::UnsupportedArch {
                arch: s.to_string(),
                os: os.as_str().to_string(),
            })
    }
}

impl FromStr for Os {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "windows" => Ok(Self::Windows),
            "linux" => Ok(Self::Linux),
            "darwin" | "macos" => Ok(Self::Darwin),
            _ => Err(Error::UnsupportedOs { os: s.to_string() }),
        }
    }
}

impl fmt::Display for Os {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated (OS, architecture) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target {
    pub os: Os,
    pub arch: Arch,
}

impl Target {
    /// Resolve the requested pair, filling gaps from the host.
    ///
    /// A missing OS defaults to the host OS. A missing architecture defaults
    /// to `amd64` on Windows and macOS and to the host architecture on Linux.
    pub fn resolve(os: Option<&str>, arch: Option<&str>) -> Result<Self> {
        let os = match non_blank(os) {
            Some(os) => os.parse()?,
            None => {
                let host = Os::host()?;
                log::info!("Target OS not specified, using current OS: {}", host);
                host
            }
        };

        let arch = match non_blank(arch) {
            Some(arch) => Arch::parse_for(arch, os)?,
            None => {
                let arch = match os {
                    Os::Windows | Os::Darwin => Arch::Amd64,
                    Os::Linux => Arch::parse_for(Arch::host_name(), os)?,
                };
                log::info!("Architecture not specified, using default: {}", arch);
                arch
            }
        };

        Ok(Self { os, arch })
    }

    pub fn extension(&self) -> &'static str {
        self.os.archive_extension()
    }

    /// `<prefix><version>.<os>-<arch>.<ext>`, e.g. `go1.22.5.linux-amd64.tar.gz`.
    pub fn archive_name(&self, prefix: &str, version: &str) -> String {
        format!(
            "{}{}.{}-{}.{}",
            prefix,
            version,
            self.os,
            self.arch,
            self.extension()
        )
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.os, self.arch)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
