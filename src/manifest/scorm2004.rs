// src/manifest/scorm2004.rs

//! SCORM 2004 manifest shape (3rd and 4th Edition)
//!
//! Both 2004 editions share this structure; the edition label flows in
//! through `ManifestMeta::version_label`. The mastery score is expressed
//! natively as an IMS Simple Sequencing primary objective with a
//! minimum normalized measure (score / 100, two decimal places).

use super::{ManifestMeta, XmlNode};

const ORG_ID: &str = "default_org";
const ITEM_ID: &str = "item_1";
const RESOURCE_ID: &str = "resource_1";
const PRIMARY_OBJECTIVE_ID: &str = "primary_obj";

/// Build the SCORM 2004 manifest tree
pub fn build_tree(meta: &ManifestMeta) -> XmlNode {
    XmlNode::new("manifest")
        .attr("identifier", &meta.identifier)
        .attr("version", &meta.version_label)
        .attr("xmlns", "http://www.imsglobal.org/xsd/imscp_v1p1")
        .attr("xmlns:adlcp", "http://www.adlnet.org/xsd/adlcp_v1p3")
        .attr("xmlns:adlseq", "http://www.adlnet.org/xsd/adlseq_v1p3")
        .attr("xmlns:adlnav", "http://www.adlnet.org/xsd/adlnav_v1p3")
        .attr("xmlns:imsss", "http://www.imsglobal.org/xsd/imsss")
        .attr("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
        .attr(
            "xsi:schemaLocation",
            "http://www.imsglobal.org/xsd/imscp_v1p1 imscp_v1p1.xsd \
             http://www.adlnet.org/xsd/adlcp_v1p3 adlcp_v1p3.xsd \
             http://www.adlnet.org/xsd/adlseq_v1p3 adlseq_v1p3.xsd \
             http://www.adlnet.org/xsd/adlnav_v1p3 adlnav_v1p3.xsd \
             http://www.imsglobal.org/xsd/imsss imsss_v1p0.xsd",
        )
        .child(metadata(meta))
        .child(organizations(meta))
        .child(resources(meta))
}

/// Mastery score as a normalized measure, e.g. 80 -> "0.80"
fn min_normalized_measure(mastery_score: u32) -> String {
    format!("{:.2}", f64::from(mastery_score) / 100.0)
}

fn metadata(meta: &ManifestMeta) -> XmlNode {
    XmlNode::new("metadata")
        .child(XmlNode::leaf("schema", "ADL SCORM"))
        .child(XmlNode::leaf("schemaversion", &meta.version_label))
}

fn sequencing(meta: &ManifestMeta) -> XmlNode {
    let objective = XmlNode::new("imsss:primaryObjective")
        .attr("objectiveID", PRIMARY_OBJECTIVE_ID)
        .attr("satisfiedByMeasure", "true")
        .child(XmlNode::leaf(
            "imsss:minNormalizedMeasure",
            min_normalized_measure(meta.mastery_score),
        ));

    XmlNode::new("imsss:sequencing").child(XmlNode::new("imsss:objectives").child(objective))
}

fn organizations(meta: &ManifestMeta) -> XmlNode {
    let item = XmlNode::new("item")
        .attr("identifier", ITEM_ID)
        .attr("identifierref", RESOURCE_ID)
        .child(XmlNode::leaf("title", &meta.title))
        .child(sequencing(meta));

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
        .attr("adlcp:scormType", "sco")
        .attr("href", &meta.starting_page);

    for file in &meta.files {
        resource = resource.child(XmlNode::new("file").attr("href", file));
    }

    XmlNode::new("resources").child(resource)
}
