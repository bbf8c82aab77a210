//! Typed model for the `content.json` entry.
//!
//! Only the fields needed for outline conversion are modeled; everything
//! else in a sheet or topic record (styles, markers, notes, extensions)
//! is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// One sheet (canvas) of a JSON mind-map document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSheet {
    /// Sheet title, when present. The outline heading comes from the
    /// root topic, not from here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Root topic of the sheet's primary hierarchy.
    #[serde(rename = "rootTopic")]
    pub root_topic: JsonTopic,
}

/// A topic node in the JSON tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonTopic {
    /// Topic title. Checked by the renderer rather than at parse time so
    /// a missing title can be reported with its sheet index and path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Child topic groups; absent for leaf topics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<JsonChildren>,
}

impl JsonTopic {
    /// Attached children in source order; empty when the `children` key
    /// is absent.
    pub fn attached(&self) -> &[JsonTopic] {
        self.children
            .as_ref()
            .map_or(&[], |children| children.attached.as_slice())
    }
}

/// Child-topic container separating the primary hierarchy from floating
/// topics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsonChildren {
    /// Topics that are part of the primary hierarchy.
    #[serde(default)]
    pub attached: Vec<JsonTopic>,
}
