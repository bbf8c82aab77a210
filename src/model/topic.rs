//! Polymorphic topic access shared by the JSON and XML trees.

use super::json::JsonTopic;
use super::xml::XmlElement;

/// Format-independent view of a topic node.
///
/// The Markdown renderer walks topics through this capability; each
/// content format supplies a borrowing adapter that knows where titles
/// and attached children live in that serialization.
pub trait Topic: Sized {
    /// Raw topic title, before whitespace normalization. `None` when the
    /// node has no title at all.
    fn title(&self) -> Option<&str>;

    /// Attached children in source order.
    fn children(&self) -> Vec<Self>;
}

/// Topic adapter over a JSON tree node.
#[derive(Debug, Clone, Copy)]
pub struct JsonTopicRef<'a>(pub &'a JsonTopic);

impl<'a> Topic for JsonTopicRef<'a> {
    fn title(&self) -> Option<&str> {
        self.0.title.as_deref()
    }

    fn children(&self) -> Vec<Self> {
        self.0.attached().iter().map(JsonTopicRef).collect()
    }
}

/// Topic adapter over an XML `topic` element.
///
/// Titles live in a `title` child element; attached children are
/// `children/topics[type="attached"]/topic` descendants.
#[derive(Debug, Clone, Copy)]
pub struct XmlTopicRef<'a>(pub &'a XmlElement);

impl<'a> Topic for XmlTopicRef<'a> {
    fn title(&self) -> Option<&str> {
        self.0.child("title").map(XmlElement::text)
    }

    fn children(&self) -> Vec<Self> {
        self.0
            .child("children")
            .into_iter()
            .flat_map(|children| children.children_named("topics"))
            .filter(|group| group.attribute("type") == Some("attached"))
            .flat_map(|group| group.children_named("topic"))
            .map(XmlTopicRef)
            .collect()
    }
}
