// src/assets.rs

//! Definition-file bundles
//!
//! Each SCORM edition ships a static set of XSD support files that
//! players expect next to the manifest. The bundles live on disk as one
//! subdirectory per edition under a configurable root, so the packaging
//! core stays decoupled from install layout. A missing bundle for a
//! supported edition indicates a broken install and fails the build.

use crate::version::VersionTag;
use std::path::{Path, PathBuf};

/// Locates the per-edition XSD bundle directories
#[derive(Debug, Clone)]
pub struct DefinitionSource {
    root: PathBuf,
}

impl DefinitionSource {
    /// Bundle lookup rooted at an explicit directory
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Default install location: `definitionFiles/` next to the executable
    pub fn install_default() -> std::io::Result<Self> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::new(dir.join("definitionFiles")))
    }

    /// Bundle directory for an edition; `None` if it does not exist
    pub fn dir_for(&self, tag: VersionTag) -> Option<PathBuf> {
        let dir = self.root.join(tag.asset_dir());
        dir.is_dir().then_some(dir)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_dir_for_present_bundle() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir(temp.path().join("scorm12")).unwrap();

        let source = DefinitionSource::new(temp.path());
        assert_eq!(
            source.dir_for(VersionTag::V1_2),
            Some(temp.path().join("scorm12"))
        );
        assert_eq!(source.dir_for(VersionTag::V2004_4), None);
    }
}
