//! Rendering options and configuration.

/// Options for rendering a content document to Markdown.
///
/// The defaults produce the canonical outline form: `-` bullets indented
/// by two spaces per level.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Character to use for unordered list markers
    pub list_marker: char,

    /// Spaces per indentation level
    pub indent_width: usize,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Set the indentation width.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            list_marker: '-',
            indent_width: 2,
        }
    }
}
