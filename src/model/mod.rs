//! Document model types for mind-map content representation.
//!
//! This module defines the intermediate representation that bridges
//! content extraction and Markdown rendering: a tagged document holding
//! either the JSON or the XML topic tree, plus a small `Topic` capability
//! the renderer is written against so the walk is not duplicated per
//! format.

mod document;
mod json;
mod topic;
mod xml;

pub use document::ContentDocument;
pub use json::{JsonChildren, JsonSheet, JsonTopic};
pub use topic::{JsonTopicRef, Topic, XmlTopicRef};
pub use xml::XmlElement;
