// src/config.rs

//! Package configuration loading and validation
//!
//! Course metadata comes in as [`PackageOptions`] (every field optional,
//! deserializable from TOML) and is validated once into an immutable
//! [`PackageConfig`]. Each missing required field has its own error
//! variant so callers can report precisely what to fix. Validation runs
//! before any filesystem mutation.

use crate::version::{VersionError, VersionTag};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default mastery score when the config omits one
pub const DEFAULT_MASTERY_SCORE: u32 = 80;

/// Default launch page when the config omits one
pub const DEFAULT_STARTING_PAGE: &str = "index.html";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: title")]
    MissingTitle,

    #[error("missing required field: identifier")]
    MissingIdentifier,

    #[error("missing required field: version")]
    MissingVersion,

    #[error("missing required field: source")]
    MissingSource,

    #[error("missing required field: destination")]
    MissingDestination,

    #[error("mastery score {0} out of range (expected 0-100)")]
    MasteryScoreOutOfRange(u32),

    #[error("source is not a readable directory: {0}")]
    SourceNotADirectory(PathBuf),

    #[error(transparent)]
    Version(#[from] VersionError),

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Raw, unvalidated package options
///
/// Mirrors the TOML config file shape. CLI flags are merged in on top
/// before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PackageOptions {
    pub title: Option<String>,
    pub identifier: Option<String>,
    pub version: Option<String>,
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    #[serde(rename = "mastery-score")]
    pub mastery_score: Option<u32>,
    #[serde(rename = "starting-page")]
    pub starting_page: Option<String>,
    pub organization: Option<String>,
}

impl PackageOptions {
    /// Load raw options from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }
}

/// Validated, immutable package configuration
#[derive(Debug, Clone)]
pub struct PackageConfig {
    pub title: String,
    pub identifier: String,
    pub version: VersionTag,
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Passing threshold, 0-100
    pub mastery_score: u32,
    /// Launch page, relative to the source root (presence not verified)
    pub starting_page: String,
    pub organization: String,
}

impl PackageConfig {
    /// Validate raw options into a usable configuration
    ///
    /// Checks the five required fields, parses the version token, and
    /// enforces the 0-100 mastery range. The source must exist as a
    /// directory; the destination is only checked later, at build time.
    pub fn from_options(opts: PackageOptions) -> Result<Self, ConfigError> {
        let title = opts
            .title
            .filter(|t| !t.is_empty())
            .ok_or(ConfigError::MissingTitle)?;
        let identifier = opts
            .identifier
            .filter(|i| !i.is_empty())
            .ok_or(ConfigError::MissingIdentifier)?;
        let version_token = opts.version.ok_or(ConfigError::MissingVersion)?;
        let source = opts.source.ok_or(ConfigError::MissingSource)?;
        let destination = opts.destination.ok_or(ConfigError::MissingDestination)?;

        let version: VersionTag = version_token.parse()?;

        let mastery_score = opts.mastery_score.unwrap_or(DEFAULT_MASTERY_SCORE);
        if mastery_score > 100 {
            return Err(ConfigError::MasteryScoreOutOfRange(mastery_score));
        }

        if !source.is_dir() {
            return Err(ConfigError::SourceNotADirectory(source));
        }

        Ok(Self {
            title,
            identifier,
            version,
            source,
            destination,
            mastery_score,
            starting_page: opts
                .starting_page
                .unwrap_or_else(|| DEFAULT_STARTING_PAGE.to_string()),
            organization: opts.organization.unwrap_or_default(),
        })
    }

    /// Load and validate a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::from_options(PackageOptions::from_file(path)?)
    }

    /// Organization title for the manifest, falling back to the course title
    pub fn organization_title(&self) -> &str {
        if self.organization.is_empty() {
            &self.title
        } else {
            &self.organization
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn full_options(source: &Path) -> PackageOptions {
        PackageOptions {
            title: Some("Course X".to_string()),
            identifier: Some("COURSE-1".to_string()),
            version: Some("1.2".to_string()),
            source: Some(source.to_path_buf()),
            destination: Some(source.join("out")),
            mastery_score: None,
            starting_page: None,
            organization: None,
        }
    }

    #[test]
    fn test_defaults_applied() {
        let temp = TempDir::new().unwrap();
        let config = PackageConfig::from_options(full_options(temp.path())).unwrap();

        assert_eq!(config.mastery_score, DEFAULT_MASTERY_SCORE);
        assert_eq!(config.starting_page, DEFAULT_STARTING_PAGE);
        assert_eq!(config.organization, "");
        assert_eq!(config.organization_title(), "Course X");
    }

    #[test]
    fn test_each_missing_field_named() {
        let temp = TempDir::new().unwrap();

        let mut opts = full_options(temp.path());
        opts.title = None;
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MissingTitle)
        ));

        let mut opts = full_options(temp.path());
        opts.identifier = None;
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MissingIdentifier)
        ));

        let mut opts = full_options(temp.path());
        opts.version = None;
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MissingVersion)
        ));

        let mut opts = full_options(temp.path());
        opts.source = None;
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MissingSource)
        ));

        let mut opts = full_options(temp.path());
        opts.destination = None;
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MissingDestination)
        ));
    }

    #[test]
    fn test_empty_required_string_rejected() {
        let temp = TempDir::new().unwrap();
        let mut opts = full_options(temp.path());
        opts.title = Some(String::new());
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MissingTitle)
        ));
    }

    #[test]
    fn test_unsupported_version_fails_at_config_time() {
        let temp = TempDir::new().unwrap();
        let mut opts = full_options(temp.path());
        opts.version = Some("2011".to_string());
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::Version(VersionError::Unsupported(_)))
        ));
    }

    #[test]
    fn test_mastery_score_range() {
        let temp = TempDir::new().unwrap();
        let mut opts = full_options(temp.path());
        opts.mastery_score = Some(101);
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::MasteryScoreOutOfRange(101))
        ));

        let mut opts = full_options(temp.path());
        opts.mastery_score = Some(100);
        assert!(PackageConfig::from_options(opts).is_ok());
    }

    #[test]
    fn test_source_must_be_directory() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();

        let mut opts = full_options(temp.path());
        opts.source = Some(file);
        assert!(matches!(
            PackageConfig::from_options(opts),
            Err(ConfigError::SourceNotADirectory(_))
        ));
    }

    #[test]
    fn test_from_toml_file() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("content");
        std::fs::create_dir(&source).unwrap();

        let config_path = temp.path().join("scormpack.toml");
        std::fs::write(
            &config_path,
            format!(
                r#"
title = "Course X"
identifier = "COURSE-1"
version = "2004.4"
source = "{}"
destination = "{}"
mastery-score = 75
organization = "Acme Learning"
"#,
                source.display(),
                temp.path().join("out").display()
            ),
        )
        .unwrap();

        let config = PackageConfig::from_file(&config_path).unwrap();
        assert_eq!(config.version, VersionTag::V2004_4);
        assert_eq!(config.mastery_score, 75);
        assert_eq!(config.organization_title(), "Acme Learning");
    }
}
