//! Plain-text renderer
//!
//! Block elements holding only inline content become one line each, inline
//! parts joined by a space. Headings get a `#` prefix per level and cards are
//! separated by a blank line.

use super::Renderer;
use crate::error::RenderError;
use crate::view::{Node, Tag};
use std::io::Write;

/// Renderer producing plain text
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Convert a view to text lines
    pub fn view_to_text(&self, view: &Node) -> String {
        let mut lines = Vec::new();
        self.node_to_lines(view, &mut lines);
        while lines.last().is_some_and(|l: &String| l.is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return String::new();
        }
        let mut text = lines.join("\n");
        text.push('\n');
        text
    }

    fn node_to_lines(&self, node: &Node, lines: &mut Vec<String>) {
        match node {
            Node::Text(s) => {
                let s = s.trim();
                if !s.is_empty() {
                    lines.push(s.to_string());
                }
            }
            Node::Element { tag, children, .. } => {
                let inline_only = !children.is_empty()
                    && children
                        .iter()
                        .all(|c| c.tag().map_or(true, |t| t.is_inline()));

                if inline_only {
                    let parts: Vec<String> = children
                        .iter()
                        .map(|c| c.text_content().trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect();
                    let prefix = tag
                        .heading_level()
                        .map(|level| format!("{} ", "#".repeat(level as usize)))
                        .unwrap_or_default();
                    lines.push(format!("{}{}", prefix, parts.join(" ")));
                } else {
                    for child in children {
                        self.node_to_lines(child, lines);
                    }
                }

                if *tag == Tag::Article {
                    lines.push(String::new());
                }
            }
        }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TextRenderer {
    fn render(&self, view: &Node, writer: &mut dyn Write) -> Result<(), RenderError> {
        writer.write_all(self.view_to_text(view).as_bytes())?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "Text"
    }

    fn file_extension(&self) -> &str {
        "txt"
    }

    fn mime_type(&self) -> &str {
        "text/plain"
    }
}
