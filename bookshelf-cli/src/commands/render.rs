//! Render command implementation

use super::select_renderer;
use anyhow::{Context, Result};
use bookshelf_core::render::Renderer;
use bookshelf_core::App;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};

/// Render the built-in listing to stdout or a file
pub fn render(format: &str, output: Option<&str>, fragment: bool) -> Result<()> {
    let renderer = select_renderer(format, !fragment)?;

    let app = App::default();
    debug!(books = app.books().len(), "Rendering catalog");
    let view = app.render();

    match output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("Failed to create output file: {}", path))?;
            let mut writer = BufWriter::new(file);
            renderer
                .render(&view, &mut writer)
                .with_context(|| format!("Failed to render {}", renderer.format_name()))?;
            writer.flush()?;
            info!("Wrote {} listing to {}", renderer.format_name(), path);
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            renderer
                .render(&view, &mut handle)
                .with_context(|| format!("Failed to render {}", renderer.format_name()))?;
            handle.flush()?;
        }
    }

    Ok(())
}
