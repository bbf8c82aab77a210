//! Document-level types.

use super::json::JsonSheet;
use super::xml::XmlElement;
use crate::detect::ContentFormat;

/// Parsed content of a mind-map archive.
///
/// Exactly one variant is populated, chosen by which content entry was
/// found in the archive (`content.json` wins when both exist). The
/// document is read-only once built; rendering borrows it and produces
/// independent output strings.
#[derive(Debug, Clone)]
pub enum ContentDocument {
    /// Ordered sheets deserialized from `content.json`.
    JsonTree(Vec<JsonSheet>),

    /// Document root element parsed from `content.xml`; sheets are its
    /// `sheet` children, each holding one `topic` child.
    XmlTree(XmlElement),
}

impl ContentDocument {
    /// Format tag of the populated variant.
    pub fn format(&self) -> ContentFormat {
        match self {
            ContentDocument::JsonTree(_) => ContentFormat::Json,
            ContentDocument::XmlTree(_) => ContentFormat::Xml,
        }
    }

    /// Number of sheets in the document.
    pub fn sheet_count(&self) -> usize {
        match self {
            ContentDocument::JsonTree(sheets) => sheets.len(),
            ContentDocument::XmlTree(root) => root.children_named("sheet").count(),
        }
    }

    /// Check if the document has any sheets.
    pub fn is_empty(&self) -> bool {
        self.sheet_count() == 0
    }
}
