//! Domain entities: core data structures

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::warn;

use crate::domain::DomainError;

/// Minimum supported runtime as (major, minor).
pub const MIN_RUNTIME_VERSION: (u32, u32) = (18, 17);

/// Visual style preset selecting a distinct theme-variable set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Aesthetic {
    #[default]
    CyberNeon,
    Brutalist,
    Organic,
    RetroFuture,
    Editorial,
    MinimalLuxury,
}

impl Aesthetic {
    /// All presets in table order.
    pub const ALL: [Aesthetic; 6] = [
        Aesthetic::CyberNeon,
        Aesthetic::Brutalist,
        Aesthetic::Organic,
        Aesthetic::RetroFuture,
        Aesthetic::Editorial,
        Aesthetic::MinimalLuxury,
    ];

    /// Identifier used on the command line and in config files.
    pub fn id(&self) -> &'static str {
        match self {
            Aesthetic::CyberNeon => "cyber-neon",
            Aesthetic::Brutalist => "brutalist",
            Aesthetic::Organic => "organic",
            Aesthetic::RetroFuture => "retro-future",
            Aesthetic::Editorial => "editorial",
            Aesthetic::MinimalLuxury => "minimal-luxury",
        }
    }

    /// Resolve an identifier, falling back to the default preset.
    ///
    /// Unknown identifiers are not an error; the fallback is logged so a
    /// misspelled preset in a script or config file is still noticeable.
    pub fn resolve(id: &str) -> Self {
        id.parse().unwrap_or_else(|_| {
            let fallback = Aesthetic::default();
            warn!(
                "unknown aesthetic {:?}, falling back to {}",
                id,
                fallback.id()
            );
            fallback
        })
    }
}

impl FromStr for Aesthetic {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Aesthetic::ALL
            .into_iter()
            .find(|a| a.id() == s.trim())
            .ok_or_else(|| format!("unknown aesthetic: {}", s))
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Light/dark mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn from_dark_flag(dark: bool) -> Self {
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// shadcn base palette used when initializing the UI library.
    pub fn base_color(&self) -> &'static str {
        match self {
            Theme::Dark => "neutral",
            Theme::Light => "stone",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}

/// Parameters of a single `init` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Project name, used as the target directory name
    pub name: String,
    pub aesthetic: Aesthetic,
    pub theme: Theme,
}

impl ProjectConfig {
    pub fn new(
        name: impl Into<String>,
        aesthetic: Aesthetic,
        theme: Theme,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::EmptyProjectName);
        }
        Ok(Self {
            name,
            aesthetic,
            theme,
        })
    }

    /// Project directory below `base`.
    pub fn project_dir(&self, base: &Path) -> PathBuf {
        base.join(&self.name)
    }
}

/// Executables and names used to build the scaffolding plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolchain {
    /// JavaScript runtime queried for its version (e.g. "node")
    pub runtime: String,
    /// Package runner used for generators (e.g. "npx")
    pub runner: String,
    /// Package manager used for installs (e.g. "npm")
    pub package_manager: String,
    /// Name of the app directory created by the generator
    pub app_name: String,
}

impl Default for Toolchain {
    fn default() -> Self {
        Self {
            runtime: "node".into(),
            runner: "npx".into(),
            package_manager: "npm".into(),
            app_name: "my-app".into(),
        }
    }
}

/// Installed runtime version, as reported by `node --version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    /// Parse `v20.1.0`, `20.1.0`, `20.1` or `20`.
    ///
    /// Pre-release or build suffixes on the patch component are ignored.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidVersion(raw.to_string());
        let trimmed = raw.trim();
        let trimmed = trimmed.strip_prefix('v').unwrap_or(trimmed);

        let mut parts = trimmed.splitn(3, '.');
        let major = parts
            .next()
            .filter(|p| !p.is_empty())
            .ok_or_else(invalid)?
            .parse::<u32>()
            .map_err(|_| invalid())?;
        let minor = match parts.next() {
            Some(p) => p.parse::<u32>().map_err(|_| invalid())?,
            None => 0,
        };
        let patch = match parts.next() {
            Some(p) => {
                let digits: String = p.chars().take_while(|c| c.is_ascii_digit()).collect();
                digits.parse::<u32>().map_err(|_| invalid())?
            }
            None => 0,
        };

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    pub fn is_compatible(&self) -> bool {
        let (min_major, min_minor) = MIN_RUNTIME_VERSION;
        self.major > min_major || (self.major == min_major && self.minor >= min_minor)
    }

    /// Fail unless this version satisfies [`MIN_RUNTIME_VERSION`].
    pub fn ensure_compatible(&self) -> Result<(), DomainError> {
        if self.is_compatible() {
            Ok(())
        } else {
            Err(DomainError::IncompatibleRuntime {
                found: self.to_string(),
            })
        }
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Expand `~`, `$VAR` and `${VAR}` in a string; returns input unchanged on failure.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_node_style_version() {
        let v = RuntimeVersion::parse("v20.1.0\n").unwrap();
        assert_eq!(
            v,
            RuntimeVersion {
                major: 20,
                minor: 1,
                patch: 0
            }
        );
    }

    #[test]
    fn parses_partial_and_prerelease_versions() {
        assert_eq!(RuntimeVersion::parse("22").unwrap().minor, 0);
        assert_eq!(RuntimeVersion::parse("21.0.0-nightly2024").unwrap().patch, 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(RuntimeVersion::parse("").is_err());
        assert!(RuntimeVersion::parse("command not found").is_err());
        assert!(RuntimeVersion::parse("v18.x").is_err());
    }

    #[test]
    fn compatibility_boundary() {
        assert!(!RuntimeVersion::parse("17.9.9").unwrap().is_compatible());
        assert!(!RuntimeVersion::parse("18.16.1").unwrap().is_compatible());
        assert!(RuntimeVersion::parse("18.17.0").unwrap().is_compatible());
        assert!(RuntimeVersion::parse("19.0.0").unwrap().is_compatible());
    }

    #[test]
    fn aesthetic_ids_round_trip() {
        for a in Aesthetic::ALL {
            assert_eq!(a.id().parse::<Aesthetic>().unwrap(), a);
        }
        assert!("vaporwave".parse::<Aesthetic>().is_err());
    }

    #[test]
    fn project_name_must_not_be_blank() {
        assert_eq!(
            ProjectConfig::new("  ", Aesthetic::default(), Theme::Dark),
            Err(DomainError::EmptyProjectName)
        );
    }
}
