// src/manifest/mod.rs

//! Manifest tree construction
//!
//! A schema family builds an [`XmlNode`] tree describing the
//! `imsmanifest.xml` document for a course; the `xml` module renders it
//! to bytes. The tree is built fresh per package build and lists every
//! regular file found under the (already populated) destination, so
//! manifest construction must run after the content copy.

pub mod scorm12;
pub mod scorm2004;
pub mod xml;

pub use xml::XmlError;

use crate::config::PackageConfig;
use crate::version::SchemaFamily;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("destination unreadable while listing package files: {path}")]
    DestinationUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}

/// A node in the semantic manifest tree
///
/// Attributes and children keep insertion order; rendered output is
/// deterministic for a given tree. A node is either a container
/// (children) or a leaf (text) but never both; the serializer rejects
/// mixed nodes as a contract violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    pub text: Option<String>,
}

impl XmlNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            text: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn child(mut self, child: XmlNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Leaf element carrying only text, e.g. `<title>Course X</title>`
    pub fn leaf(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name).text(text)
    }
}

/// Inputs a schema family needs to build a manifest tree
#[derive(Debug, Clone)]
pub struct ManifestMeta {
    pub title: String,
    pub identifier: String,
    pub organization: String,
    pub version_label: String,
    pub mastery_score: u32,
    pub starting_page: String,
    /// Relative paths of every regular file in the package, sorted
    pub files: Vec<String>,
}

impl ManifestMeta {
    /// Assemble manifest inputs from a validated config and the
    /// populated destination directory
    pub fn from_config(config: &PackageConfig, destination: &Path) -> Result<Self, SchemaError> {
        Ok(Self {
            title: config.title.clone(),
            identifier: config.identifier.clone(),
            organization: config.organization_title().to_string(),
            version_label: config.version.label().to_string(),
            mastery_score: config.mastery_score,
            starting_page: config.starting_page.clone(),
            files: list_content_files(destination)?,
        })
    }
}

/// Build the manifest tree for a schema family
pub fn build(meta: &ManifestMeta, family: SchemaFamily) -> XmlNode {
    match family {
        SchemaFamily::Scorm12 => scorm12::build_tree(meta),
        SchemaFamily::Scorm2004 => scorm2004::build_tree(meta),
    }
}

/// List every regular file under `root` as sorted, slash-separated
/// relative paths
///
/// Runs against the destination after the content copy, so the listing
/// reflects what actually ships in the package.
pub fn list_content_files(root: &Path) -> Result<Vec<String>, SchemaError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| SchemaError::DestinationUnreadable {
            path: root.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        // strip_prefix cannot fail for entries yielded under root
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        files.push(parts.join("/"));
    }

    files.sort();
    Ok(files)
}
