//! JSON renderer for the view tree

use super::Renderer;
use crate::error::RenderError;
use crate::view::Node;
use std::io::Write;

/// Renderer producing pretty-printed JSON
pub struct JsonRenderer;

impl JsonRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, view: &Node, writer: &mut dyn Write) -> Result<(), RenderError> {
        serde_json::to_writer_pretty(&mut *writer, view)?;
        writeln!(writer)?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }
}
