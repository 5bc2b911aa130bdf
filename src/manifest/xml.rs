// src/manifest/xml.rs

//! Manifest tree serialization
//!
//! Renders an [`XmlNode`] tree to a well-formed XML document using
//! quick-xml's event writer. Attributes keep insertion order, text is
//! escaped on write, empty elements self-close, and output is
//! deterministic for a given tree. A node carrying both text and
//! children violates the tree contract and is rejected rather than
//! guessed at.

use super::XmlNode;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum XmlError {
    /// Contract violation: a node must be a container or a leaf, not both
    #[error("malformed manifest tree: element '{0}' has both text and children")]
    MixedContent(String),

    #[error("xml write failed: {0}")]
    Write(#[from] quick_xml::Error),
}

/// Render a manifest tree to a document with the given encoding declaration
///
/// The packager always passes "UTF-8"; the declaration mirrors whatever
/// is requested.
pub fn render(root: &XmlNode, encoding: &str) -> Result<Vec<u8>, XmlError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding), None)))?;
    write_node(&mut writer, root)?;
    Ok(writer.into_inner())
}

fn write_node(writer: &mut Writer<Vec<u8>>, node: &XmlNode) -> Result<(), XmlError> {
    if node.text.is_some() && !node.children.is_empty() {
        return Err(XmlError::MixedContent(node.name.clone()));
    }

    let mut start = BytesStart::new(node.name.as_str());
    for (name, value) in &node.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if node.children.is_empty() && node.text.is_none() {
        writer.write_event(Event::Empty(start))?;
        return Ok(());
    }

    writer.write_event(Event::Start(start))?;
    if let Some(text) = &node.text {
        writer.write_event(Event::Text(BytesText::new(text)))?;
    }
    for child in &node.children {
        write_node(writer, child)?;
    }
    writer.write_event(Event::End(BytesEnd::new(node.name.as_str())))?;
    Ok(())
}
