//! XMind archive converter.

use std::path::Path;

use crate::error::Result;
use crate::model::ContentDocument;
use crate::render;

use super::{ConvertOptions, ConvertResult, DocumentConverter};

/// Converter for XMind mind-map archives.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmindConverter;

impl XmindConverter {
    /// Create a new XMind converter.
    pub fn new() -> Self {
        Self
    }

    fn convert_document(doc: &ContentDocument, options: &ConvertOptions) -> Result<ConvertResult> {
        let content = render::to_markdown(doc, &options.render)?;
        Ok(ConvertResult::new(content, doc.format(), doc.sheet_count()))
    }
}

impl DocumentConverter for XmindConverter {
    fn supported_extensions(&self) -> &[&str] {
        &["xmind"]
    }

    fn name(&self) -> &str {
        "xmind"
    }

    fn convert(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = crate::parse_file(path)?;
        Self::convert_document(&doc, options)
    }

    fn convert_bytes(&self, bytes: &[u8], options: &ConvertOptions) -> Result<ConvertResult> {
        let doc = crate::parse_bytes(bytes)?;
        Self::convert_document(&doc, options)
    }
}
