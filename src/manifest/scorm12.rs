// src/manifest/scorm12.rs

//! SCORM 1.2 manifest shape
//!
//! The 1.2 edition has no native sequencing mechanism, so the mastery
//! score goes into the ADL extension element `<adlcp:masteryscore>` on
//! the launch item, as an integer percentage.

use super::{ManifestMeta, XmlNode};

const ORG_ID: &str = "default_org";
const ITEM_ID: &str = "item_1";
const RESOURCE_ID: &str = "resource_1";

/// Build the SCORM 1.2 manifest tree
pub fn build_tree(meta: &ManifestMeta) -> XmlNode {
    XmlNode::new("manifest")
        .attr("identifier", &meta.identifier)
        .attr("version", &meta.version_label)
        .attr("xmlns", "http://www.imsproject.org/xsd/imscp_rootv1p1p2")
        .attr("xmlns:adlcp", "http://www.adlnet.org/xsd/adlcp_rootv1p2")
        .attr("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
        .attr(
            "xsi:schemaLocation",
            "http://www.imsproject.org/xsd/imscp_rootv1p1p2 imscp_rootv1p1p2.xsd \
             http://www.imsglobal.org/xsd/imsmd_rootv1p2p1 imsmd_rootv1p2p1.xsd \
             http://www.adlnet.org/xsd/adlcp_rootv1p2 adlcp_rootv1p2.xsd",
        )
        .child(metadata(meta))
        .child(organizations(meta))
        .child(resources(meta))
}

fn metadata(meta: &ManifestMeta) -> XmlNode {
    XmlNode::new("metadata")
        .child(XmlNode::leaf("schema", "ADL SCORM"))
        .child(XmlNode::leaf("schemaversion", &meta.version_label))
}

fn organizations(meta: &ManifestMeta) -> XmlNode {
    let item = XmlNode::new("item")
        .attr("identifier", ITEM_ID)
        .attr("identifierref", RESOURCE_ID)
        .attr("isvisible", "true")
        .child(XmlNode::leaf("title", &meta.title))
        .child(XmlNode::leaf(
            "adlcp:masteryscore",
            meta.mastery_score.to_string(),
        ));

    let organization = XmlNode::new("organization")
        .attr("identifier", ORG_ID)
        .child(XmlNode::leaf("title", &meta.organization))
        .child(item);

    XmlNode::new("organizations")
        .attr("default", ORG_ID)
        .child(organization)
}

fn resources(meta: &ManifestMeta) -> XmlNode {
    let mut resource = XmlNode::new("resource")
        .attr("identifier", RESOURCE_ID)
        .attr("type", "webcontent")
        .attr("adlcp:scormtype", "sco")
        .attr("href", &meta.starting_page);

    for file in &meta.files {
        resource = resource.child(XmlNode::new("file").attr("href", file));
    }

    XmlNode::new("resources").child(resource)
}
