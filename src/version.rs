// src/version.rs

//! SCORM version resolution
//!
//! Maps a user-supplied version token onto one of the three supported
//! SCORM editions. Each edition belongs to a schema family (1.2 or
//! 2004) that governs the shape of the generated manifest, and carries
//! the human-readable label written into the manifest root.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VersionError {
    #[error("unsupported SCORM version: '{0}' (expected 1.2, 2004.3 or 2004.4)")]
    Unsupported(String),
}

/// One of the three supported SCORM editions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VersionTag {
    /// SCORM 1.2
    V1_2,
    /// SCORM 2004 3rd Edition
    V2004_3,
    /// SCORM 2004 4th Edition
    V2004_4,
}

/// Manifest shape family an edition belongs to
///
/// The two 2004 editions share the 2004 manifest structure and differ
/// only in version label and XSD bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaFamily {
    Scorm12,
    Scorm2004,
}

impl VersionTag {
    /// Schema family governing manifest shape
    pub fn family(&self) -> SchemaFamily {
        match self {
            VersionTag::V1_2 => SchemaFamily::Scorm12,
            VersionTag::V2004_3 | VersionTag::V2004_4 => SchemaFamily::Scorm2004,
        }
    }

    /// Version label written into the manifest root and metadata block
    pub fn label(&self) -> &'static str {
        match self {
            VersionTag::V1_2 => "1.2",
            VersionTag::V2004_3 => "2004 3rd Edition",
            VersionTag::V2004_4 => "2004 4th Edition",
        }
    }

    /// Canonical token, accepted on input and used in config files
    pub fn token(&self) -> &'static str {
        match self {
            VersionTag::V1_2 => "1.2",
            VersionTag::V2004_3 => "2004.3",
            VersionTag::V2004_4 => "2004.4",
        }
    }

    /// Subdirectory name of the XSD definition-file bundle for this edition
    pub fn asset_dir(&self) -> &'static str {
        match self {
            VersionTag::V1_2 => "scorm12",
            VersionTag::V2004_3 => "scorm2004-3",
            VersionTag::V2004_4 => "scorm2004-4",
        }
    }

    /// All supported editions
    pub fn all() -> [VersionTag; 3] {
        [VersionTag::V1_2, VersionTag::V2004_3, VersionTag::V2004_4]
    }
}

impl FromStr for VersionTag {
    type Err = VersionError;

    /// Parse a version token
    ///
    /// Normalization is total: the token is trimmed and case-folded, and
    /// both the canonical tokens ("1.2", "2004.3", "2004.4") and the
    /// manifest labels ("2004 3rd Edition", ...) are accepted. Anything
    /// else fails with the original token in the message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1.2" | "scorm1.2" | "scorm 1.2" => Ok(VersionTag::V1_2),
            "2004.3" | "2004 3rd edition" | "2004v3" => Ok(VersionTag::V2004_3),
            "2004.4" | "2004 4th edition" | "2004v4" => Ok(VersionTag::V2004_4),
            _ => Err(VersionError::Unsupported(s.to_string())),
        }
    }
}

impl fmt::Display for VersionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl TryFrom<String> for VersionTag {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<VersionTag> for String {
    fn from(tag: VersionTag) -> String {
        tag.token().to_string()
    }
}
