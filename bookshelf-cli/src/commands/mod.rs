//! CLI command implementations

mod card;
mod list;
mod render;

pub use card::card;
pub use list::list;
pub use render::render;

use anyhow::{Context, Result};
use bookshelf_core::render::{renderer_for_format, HtmlRenderer, PageOptions, Renderer};

/// Look up a renderer, wrapping HTML in a full document when requested
fn select_renderer(format: &str, document: bool) -> Result<Box<dyn Renderer>> {
    let renderer = renderer_for_format(format)
        .with_context(|| format!("Unsupported output format: {}", format))?;

    if document && renderer.format_name() == "HTML" {
        let options = PageOptions {
            document: true,
            ..PageOptions::default()
        };
        return Ok(Box::new(HtmlRenderer::new().with_page_options(options)));
    }

    Ok(renderer)
}
