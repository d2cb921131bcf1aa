//! List command implementation

use anyhow::Result;
use bookshelf_core::{App, Price};
use serde::Serialize;
use tracing::debug;

/// Catalog summary output
#[derive(Serialize)]
struct CatalogInfo<'a> {
    count: usize,
    bestsellers: usize,
    books: &'a [bookshelf_core::BookRecord],
}

/// Print the built-in catalog
pub fn list(json: bool) -> Result<()> {
    let app = App::default();
    let books = app.books();

    let info = CatalogInfo {
        count: books.len(),
        bestsellers: books.iter().filter(|b| b.is_bestseller).count(),
        books,
    };
    debug!(books = info.count, bestsellers = info.bestsellers, "Listing catalog");

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        for book in info.books {
            let mut flags = Vec::new();
            if book.is_bestseller {
                flags.push("bestseller");
            }
            if !book.is_available {
                flags.push("not available");
            }
            println!(
                "{:<24} {:<22} {:<16} {:>8}  {}",
                book.title,
                book.author,
                book.genre,
                Price(book.price).to_string(),
                flags.join(", ")
            );
        }
        println!("Books:       {}", info.count);
        println!("Bestsellers: {}", info.bestsellers);
    }

    Ok(())
}
