// src/error.rs

//! Crate-level error type
//!
//! Aggregates the per-module errors so the build entry point surfaces
//! every failure unmodified. Filesystem failures are fatal to the
//! current build and never retried; no cleanup of a partially written
//! destination is attempted.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    #[error(transparent)]
    Version(#[from] crate::version::VersionError),

    #[error(transparent)]
    Schema(#[from] crate::manifest::SchemaError),

    #[error(transparent)]
    Serialize(#[from] crate::manifest::XmlError),

    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("definition files for SCORM {version} not found under {path} (broken install?)")]
    MissingDefinitionFiles {
        version: crate::version::VersionTag,
        path: PathBuf,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("copy failed: {0}")]
    Walk(#[from] walkdir::Error),
}
