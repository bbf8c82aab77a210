//! # unxmind
//!
//! Convert XMind mind-map archives to Markdown outlines.
//!
//! An XMind file is a ZIP container whose topic tree is serialized either
//! as JSON (`content.json`, XMind 2020+) or as namespaced XML
//! (`content.xml`, XMind 8 and earlier). This library detects the
//! embedded format, parses it into a uniform document and renders one
//! heading-rooted Markdown outline per sheet.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unxmind::{parse_file, render};
//!
//! fn main() -> unxmind::Result<()> {
//!     // Parse a mind-map archive
//!     let doc = parse_file("map.xmind")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Dual-format content loader**: JSON and XML content entries,
//!   detected from the archive listing
//! - **One document per sheet**: `# <root title>` heading plus an
//!   indented bullet outline
//! - **Deterministic output**: sibling order and nesting depth mirror
//!   the source tree exactly
//! - **Single rendering algorithm**: one recursive walk over a shared
//!   topic interface, fed by per-format adapters

pub mod convert;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use convert::{
    ConvertOptions, ConvertResult, ConverterRegistry, DocumentConverter, XmindConverter,
};
pub use detect::{
    detect_format_from_bytes, detect_format_from_path, is_xmind, is_xmind_bytes, ContentFormat,
};
pub use error::{Error, Result};
pub use extract::ContentExtractor;
pub use model::{ContentDocument, JsonChildren, JsonSheet, JsonTopic, Topic, XmlElement};
pub use render::{MarkdownRenderer, RenderOptions};

use std::io::Read;
use std::path::Path;

/// Parse a mind-map archive file and return its content document.
///
/// # Example
///
/// ```no_run
/// use unxmind::parse_file;
///
/// let doc = parse_file("map.xmind").unwrap();
/// println!("Sheets: {}", doc.sheet_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<ContentDocument> {
    ContentExtractor::open(path)?.extract()
}

/// Parse a mind-map archive from bytes.
///
/// # Example
///
/// ```no_run
/// use unxmind::parse_bytes;
///
/// let data = std::fs::read("map.xmind").unwrap();
/// let doc = parse_bytes(&data).unwrap();
/// ```
pub fn parse_bytes(data: &[u8]) -> Result<ContentDocument> {
    ContentExtractor::from_bytes(data)?.extract()
}

/// Parse a mind-map archive from a reader.
///
/// # Example
///
/// ```no_run
/// use unxmind::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("map.xmind").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<ContentDocument> {
    ContentExtractor::from_reader(reader)?.extract()
}

/// Convert a mind-map archive to Markdown with default options.
///
/// # Example
///
/// ```no_run
/// use unxmind::to_markdown;
///
/// let markdown = to_markdown("map.xmind").unwrap();
/// std::fs::write("map.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a mind-map archive to Markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_markdown(&doc, options)
}

/// Builder for parsing and converting mind-map archives.
///
/// # Example
///
/// ```no_run
/// use unxmind::Unxmind;
///
/// let markdown = Unxmind::new()
///     .with_list_marker('*')
///     .parse("map.xmind")?
///     .to_markdown()?;
/// # Ok::<(), unxmind::Error>(())
/// ```
pub struct Unxmind {
    render_options: RenderOptions,
}

impl Unxmind {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            render_options: RenderOptions::default(),
        }
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.render_options = self.render_options.with_list_marker(marker);
        self
    }

    /// Set the indentation width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.render_options = self.render_options.with_indent_width(width);
        self
    }

    /// Parse a mind-map archive file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnxmindResult> {
        let document = parse_file(path)?;
        Ok(UnxmindResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a mind-map archive from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnxmindResult> {
        let document = parse_bytes(data)?;
        Ok(UnxmindResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unxmind {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a mind-map archive.
pub struct UnxmindResult {
    /// The parsed document
    pub document: ContentDocument,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnxmindResult {
    /// Convert to a single Markdown string (sheets joined by blank lines).
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Render one Markdown document per sheet.
    pub fn rendered_sheets(&self) -> Result<Vec<String>> {
        render::render_sheets(&self.document, &self.render_options)
    }

    /// Get the parsed document.
    pub fn document(&self) -> &ContentDocument {
        &self.document
    }
}
