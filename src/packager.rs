// src/packager.rs

//! Package build orchestration
//!
//! Linear five-step pipeline: validate configuration, create the
//! destination, copy the source content, write `imsmanifest.xml`, copy
//! the edition's definition files. No step retries; any failure aborts
//! the build and propagates unmodified. An interrupted build leaves a
//! partially populated destination behind for the caller to remove.

use crate::assets::DefinitionSource;
use crate::config::PackageConfig;
use crate::error::{Error, Result};
use crate::manifest::{self, ManifestMeta};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

/// Manifest file name required by SCORM content packaging
pub const MANIFEST_FILENAME: &str = "imsmanifest.xml";

/// Destination subdirectory receiving the XSD bundle
pub const DEFINITIONS_SUBDIR: &str = "definitionFiles";

/// Builds one SCORM package from a validated configuration
pub struct Packager {
    config: PackageConfig,
    definitions: DefinitionSource,
}

impl Packager {
    pub fn new(config: PackageConfig, definitions: DefinitionSource) -> Self {
        Self {
            config,
            definitions,
        }
    }

    /// Run the build
    ///
    /// The configuration was validated at construction, so the pipeline
    /// starts with the first filesystem mutation. The manifest is
    /// written after the content copy because its `<file>` list is
    /// derived from the populated destination.
    pub fn build(&self) -> Result<()> {
        info!(
            "building SCORM {} package '{}' -> {}",
            self.config.version,
            self.config.identifier,
            self.config.destination.display()
        );

        self.create_destination()?;
        self.copy_content()?;
        self.write_manifest()?;
        self.copy_definition_files()?;

        info!("package build complete");
        Ok(())
    }

    fn create_destination(&self) -> Result<()> {
        let dest = &self.config.destination;
        if dest.exists() {
            return Err(Error::DestinationExists(dest.clone()));
        }
        fs::create_dir_all(dest)?;
        debug!("created destination {}", dest.display());
        Ok(())
    }

    fn copy_content(&self) -> Result<()> {
        info!(
            "copying content from {}",
            self.config.source.display()
        );
        copy_tree(&self.config.source, &self.config.destination)
    }

    fn write_manifest(&self) -> Result<()> {
        let meta = ManifestMeta::from_config(&self.config, &self.config.destination)?;
        debug!("manifest lists {} files", meta.files.len());

        let tree = manifest::build(&meta, self.config.version.family());
        let document = manifest::xml::render(&tree, "UTF-8")?;

        let path = self.config.destination.join(MANIFEST_FILENAME);
        fs::write(&path, document)?;
        info!("wrote {}", path.display());
        Ok(())
    }

    fn copy_definition_files(&self) -> Result<()> {
        let tag = self.config.version;
        let bundle = self
            .definitions
            .dir_for(tag)
            .ok_or_else(|| Error::MissingDefinitionFiles {
                version: tag,
                path: self.definitions.root().to_path_buf(),
            })?;

        let target = self.config.destination.join(DEFINITIONS_SUBDIR);
        fs::create_dir_all(&target)?;
        debug!("copying definition files from {}", bundle.display());
        copy_tree(&bundle, &target)
    }
}

/// Recursively copy a directory tree, preserving relative paths
///
/// Two phases: directories are created top-down first, then files are
/// copied, so a file copy never races its parent directory.
fn copy_tree(source: &Path, destination: &Path) -> Result<()> {
    let mut files = Vec::new();

    for entry in WalkDir::new(source) {
        let entry = entry?;
        if entry.path() == source {
            continue;
        }
        // strip_prefix cannot fail for entries yielded under source
        let relative = entry.path().strip_prefix(source).unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            files.push((entry.path().to_path_buf(), target));
        }
    }

    for (from, to) in files {
        fs::copy(&from, &to)?;
    }

    Ok(())
}
