//! Markdown rendering for mind-map documents.

use crate::error::{Error, Result};
use crate::model::{ContentDocument, JsonTopicRef, Topic, XmlTopicRef};

use super::RenderOptions;

/// Convert a document to a single Markdown string.
///
/// Sheets are rendered in document order and joined with one blank line.
pub fn to_markdown(doc: &ContentDocument, options: &RenderOptions) -> Result<String> {
    Ok(render_sheets(doc, options)?.join("\n\n"))
}

/// Render one Markdown document per sheet, in document order.
pub fn render_sheets(doc: &ContentDocument, options: &RenderOptions) -> Result<Vec<String>> {
    let renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Markdown renderer.
///
/// The recursive walk is written once against the [`Topic`] capability;
/// the two content formats differ only in the adapter that feeds it.
pub struct MarkdownRenderer {
    options: RenderOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render every sheet of a document.
    pub fn render(&self, doc: &ContentDocument) -> Result<Vec<String>> {
        match doc {
            ContentDocument::JsonTree(sheets) => sheets
                .iter()
                .enumerate()
                .map(|(index, sheet)| self.render_sheet(&JsonTopicRef(&sheet.root_topic), index))
                .collect(),
            ContentDocument::XmlTree(root) => root
                .children_named("sheet")
                .enumerate()
                .map(|(index, sheet)| {
                    let topic = sheet.child("topic").ok_or_else(|| Error::MalformedTopic {
                        sheet: index,
                        path: "topic".to_string(),
                    })?;
                    self.render_sheet(&XmlTopicRef(topic), index)
                })
                .collect(),
        }
    }

    /// Render one sheet rooted at `root`.
    fn render_sheet<T: Topic>(&self, root: &T, sheet: usize) -> Result<String> {
        log::debug!("rendering sheet {}", sheet);

        let mut output = String::new();
        let mut trail = Vec::new();
        self.render_topic(&mut output, root, true, -1, sheet, &mut trail)?;
        Ok(output.trim().to_string())
    }

    /// Recursive topic walk.
    ///
    /// `depth` starts at -1 so that direct children of the root land at
    /// indentation level 0; only the sheet's root topic is rendered as a
    /// heading.
    fn render_topic<T: Topic>(
        &self,
        output: &mut String,
        topic: &T,
        is_root: bool,
        depth: i32,
        sheet: usize,
        trail: &mut Vec<usize>,
    ) -> Result<()> {
        let title = topic.title().ok_or_else(|| Error::MalformedTopic {
            sheet,
            path: topic_path(trail),
        })?;
        let title = normalize_title(title);

        if is_root {
            output.push_str("# ");
            output.push_str(&title);
            output.push_str("\n\n");
        } else {
            output.push_str(&" ".repeat(self.options.indent_width * depth as usize));
            output.push(self.options.list_marker);
            output.push(' ');
            output.push_str(&title);
            output.push('\n');
        }

        for (index, child) in topic.children().iter().enumerate() {
            trail.push(index);
            self.render_topic(output, child, false, depth + 1, sheet, trail)?;
            trail.pop();
        }

        Ok(())
    }
}

/// Collapse line breaks so a title always renders on one Markdown line.
/// A CRLF pair becomes a single space, as does a lone CR or LF.
fn normalize_title(title: &str) -> String {
    title.replace("\r\n", " ").replace(['\r', '\n'], " ")
}

/// Path of a topic under its sheet's root, for error reporting.
fn topic_path(trail: &[usize]) -> String {
    let mut path = String::from("rootTopic");
    for index in trail {
        path.push_str(&format!("/children[{}]", index));
    }
    path
}
