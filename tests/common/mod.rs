// tests/common/mod.rs

//! Shared helpers for integration tests

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use scormpack::XmlNode;
use std::path::Path;

/// Parse an XML document back into an `XmlNode` tree
pub fn parse_xml(bytes: &[u8]) -> XmlNode {
    let text = std::str::from_utf8(bytes).expect("manifest is valid UTF-8");
    let mut reader = Reader::from_str(text);
    reader.trim_text(true);

    let mut stack: Vec<XmlNode> = Vec::new();
    let mut root = None;
    loop {
        match reader.read_event().expect("manifest is well-formed XML") {
            Event::Start(e) => stack.push(node_from_start(&e)),
            Event::Empty(e) => {
                let node = node_from_start(&e);
                attach(&mut stack, &mut root, node);
            }
            Event::Text(e) => {
                let text = e.unescape().unwrap().into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.text = Some(text);
                }
            }
            Event::End(_) => {
                let node = stack.pop().unwrap();
                attach(&mut stack, &mut root, node);
            }
            Event::Eof => break,
            _ => {}
        }
    }
    root.expect("document has a root element")
}

/// Read and parse a manifest file
pub fn parse_manifest(path: &Path) -> XmlNode {
    parse_xml(&std::fs::read(path).expect("manifest file readable"))
}

/// Depth-first search for the first element with the given name
pub fn find<'a>(node: &'a XmlNode, name: &str) -> Option<&'a XmlNode> {
    if node.name == name {
        return Some(node);
    }
    node.children.iter().find_map(|c| find(c, name))
}

/// Attribute value by name
pub fn attr<'a>(node: &'a XmlNode, name: &str) -> Option<&'a str> {
    node.attributes
        .iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn node_from_start(e: &BytesStart<'_>) -> XmlNode {
    let name = String::from_utf8(e.name().as_ref().to_vec()).unwrap();
    let mut node = XmlNode::new(name);
    for a in e.attributes() {
        let a = a.unwrap();
        node.attributes.push((
            String::from_utf8(a.key.as_ref().to_vec()).unwrap(),
            a.unescape_value().unwrap().into_owned(),
        ));
    }
    node
}

fn attach(stack: &mut Vec<XmlNode>, root: &mut Option<XmlNode>, node: XmlNode) {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
    } else {
        *root = Some(node);
    }
}
