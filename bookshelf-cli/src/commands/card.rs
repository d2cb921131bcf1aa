//! Card command implementation

use super::select_renderer;
use anyhow::{Context, Result};
use bookshelf_core::render::Renderer;
use bookshelf_core::{BookCard, BookRecord};
use std::io::{self, Write};
use tracing::debug;

/// Render a single book card to stdout
pub fn card(book: &BookRecord, format: &str) -> Result<()> {
    let renderer = select_renderer(format, false)?;
    debug!(title = %book.title, format = renderer.format_name(), "Rendering card");

    let view = BookCard::new(book).render();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    renderer
        .render(&view, &mut handle)
        .with_context(|| format!("Failed to render card for {}", book.title))?;
    handle.flush()?;

    Ok(())
}
