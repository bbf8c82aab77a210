//! Parsing of the decoded `content.json` entry.

use crate::error::Result;
use crate::model::JsonSheet;

/// Parse `content.json` text into ordered sheet records.
///
/// The top-level value must be an array of sheet objects, each exposing
/// a `rootTopic`; anything else is a content parse error.
pub(crate) fn parse_sheets(text: &str) -> Result<Vec<JsonSheet>> {
    Ok(serde_json::from_str(text)?)
}
