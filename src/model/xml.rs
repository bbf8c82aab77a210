//! Owned element model for the `content.xml` entry.

use std::collections::HashMap;

/// A namespace-normalized XML element.
///
/// Element and attribute names are stored as local names: namespace
/// prefixes and `xmlns` declarations are dropped when the tree is built,
/// so lookups never deal with prefixes. Child order is preserved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    name: String,
    attributes: HashMap<String, String>,
    text: String,
    children: Vec<XmlElement>,
}

impl XmlElement {
    /// Create an element with the given local name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Local name of this element.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Direct text content, concatenated in source order.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Append a run of direct text content.
    pub fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    /// Get an attribute value by local name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Append a child element.
    pub fn add_child(&mut self, child: XmlElement) {
        self.children.push(child);
    }

    /// All child elements in source order.
    pub fn children(&self) -> &[XmlElement] {
        &self.children
    }

    /// First child element with the given local name.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All child elements with the given local name, in source order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |child| child.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> XmlElement {
        let mut root = XmlElement::new("sheet");
        root.set_attribute("theme", "classic");

        let mut topic = XmlElement::new("topic");
        topic.push_text("ignored");
        root.add_child(topic);

        let mut title = XmlElement::new("title");
        title.push_text("Sheet One");
        root.add_child(title);

        root.add_child(XmlElement::new("topic"));
        root
    }

    #[test]
    fn test_child_returns_first_match() {
        let root = sample();
        let topic = root.child("topic").unwrap();
        assert_eq!(topic.text(), "ignored");
        assert!(root.child("relationships").is_none());
    }

    #[test]
    fn test_children_named_preserves_order() {
        let root = sample();
        let names: Vec<&str> = root.children().iter().map(XmlElement::name).collect();
        assert_eq!(names, ["topic", "title", "topic"]);
        assert_eq!(root.children_named("topic").count(), 2);
    }

    #[test]
    fn test_attributes() {
        let root = sample();
        assert_eq!(root.attribute("theme"), Some("classic"));
        assert_eq!(root.attribute("type"), None);
    }

    #[test]
    fn test_text_accumulates() {
        let mut title = XmlElement::new("title");
        title.push_text("Line1");
        title.push_text(" Line2");
        assert_eq!(title.text(), "Line1 Line2");
    }
}
