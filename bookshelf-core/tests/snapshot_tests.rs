//! Snapshot tests for bookshelf-core using insta
//!
//! These tests capture rendered output to detect unintended changes in the
//! markup and text layout.

use bookshelf_core::render::{renderer_for_format, HtmlRenderer, Renderer};
use bookshelf_core::{App, BookCard, BookRecord};

/// Helper to create a bestseller record for testing
fn sample_book() -> BookRecord {
    BookRecord::new("The Great Gatsby", "F. Scott Fitzgerald", 9.99, "Fiction")
        .with_original_price(14.99)
        .bestseller(true)
}

#[test]
fn test_bestseller_card_html_snapshot() {
    let book = sample_book();
    let view = BookCard::new(&book).render();
    let html = HtmlRenderer::new().view_to_html(&view);

    insta::assert_snapshot!("bestseller_card_html", html);
}

#[test]
fn test_app_text_snapshot() {
    let view = App::default().render();
    let renderer = renderer_for_format("text").unwrap();
    let text = renderer.render_to_string(&view).unwrap();

    insta::assert_snapshot!("app_text", text);
}

#[test]
fn test_catalog_json_snapshot() {
    let app = App::default();
    insta::assert_json_snapshot!("catalog_json", &app.books()[..2]);
}
