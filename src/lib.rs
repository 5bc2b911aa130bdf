// src/lib.rs

//! Scormpack SCORM Package Builder
//!
//! Assembles a distributable SCORM package from a source directory of
//! course content plus a small set of metadata (title, identifier,
//! mastery score, starting page, organization).
//!
//! # Pipeline
//!
//! - Validate the configuration (all required fields, supported version)
//! - Create the destination directory (must not already exist)
//! - Copy the source content verbatim, preserving relative paths
//! - Generate and write `imsmanifest.xml` for the selected SCORM edition
//! - Copy the per-edition XSD definition files into `definitionFiles/`
//!
//! Three editions are supported: SCORM 1.2, SCORM 2004 3rd Edition, and
//! SCORM 2004 4th Edition. The 1.2 and 2004 manifests differ in
//! namespace declarations and in how the mastery score is encoded.

pub mod assets;
pub mod config;
mod error;
pub mod manifest;
pub mod packager;
pub mod version;

pub use assets::DefinitionSource;
pub use config::{ConfigError, PackageConfig, PackageOptions};
pub use error::{Error, Result};
pub use manifest::{ManifestMeta, SchemaError, XmlError, XmlNode};
pub use packager::{Packager, DEFINITIONS_SUBDIR, MANIFEST_FILENAME};
pub use version::{SchemaFamily, VersionError, VersionTag};
