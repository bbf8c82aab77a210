//! Parsing of the decoded `content.xml` entry.
//!
//! XMind XML content carries namespace declarations and prefixed
//! attribute names (`xmlns:xhtml`, `svg:width`, ...). The parse is
//! namespace-aware and keeps only local names, so the rest of the crate
//! can query `sheet`, `topic`, `title` and `type` without caring which
//! prefixes the exporting application chose.

use roxmltree::{Document, Node};

use crate::error::Result;
use crate::model::XmlElement;

/// Parse `content.xml` text into an owned element tree rooted at the
/// document element.
pub(crate) fn parse_tree(text: &str) -> Result<XmlElement> {
    let doc = Document::parse(text)?;
    Ok(convert(doc.root_element()))
}

fn convert(node: Node<'_, '_>) -> XmlElement {
    let mut element = XmlElement::new(node.tag_name().name());

    for attr in node.attributes() {
        element.set_attribute(attr.name(), attr.value());
    }

    for child in node.children() {
        if child.is_element() {
            element.add_child(convert(child));
        } else if let Some(text) = child.text() {
            element.push_text(text);
        }
    }

    element
}
