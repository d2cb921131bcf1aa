//! Renderers for writing a view tree to output formats

mod html;
mod json;
mod text;

pub use html::{escape_html, HtmlRenderer, PageOptions};
pub use json::JsonRenderer;
pub use text::TextRenderer;

use crate::error::RenderError;
use crate::view::Node;
use std::io::Write;

/// Trait for rendering views to output formats
pub trait Renderer: Send + Sync {
    /// Render a view to a writer
    fn render(&self, view: &Node, writer: &mut dyn Write) -> Result<(), RenderError>;

    /// Format name (e.g., "HTML", "JSON")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;

    /// Render a view into a string
    fn render_to_string(&self, view: &Node) -> Result<String, RenderError> {
        let mut output = Vec::new();
        self.render(view, &mut output)?;
        String::from_utf8(output).map_err(|e| RenderError::EncodingFailed(e.to_string()))
    }
}

/// Get a renderer by format name
pub fn renderer_for_format(format: &str) -> Option<Box<dyn Renderer>> {
    match format.to_lowercase().as_str() {
        "html" | "htm" => Some(Box::new(HtmlRenderer::new())),
        "text" | "txt" => Some(Box::new(TextRenderer::new())),
        "json" => Some(Box::new(JsonRenderer::new())),
        _ => None,
    }
}
