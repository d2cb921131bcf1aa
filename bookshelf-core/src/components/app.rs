//! Composition root rendering the book listing

use crate::types::BookRecord;
use crate::view::{Node, Tag};

/// Page heading rendered above the listing
pub const PAGE_TITLE: &str = "Book Library";

/// The built-in catalog shown by `App::default()`
pub fn default_catalog() -> Vec<BookRecord> {
    vec![
        BookRecord::new("The Great Gatsby", "F. Scott Fitzgerald", 9.99, "Fiction")
            .with_original_price(14.99)
            .bestseller(true),
        BookRecord::new("1984", "George Orwell", 12.99, "Dystopian")
            .with_original_price(15.99),
        BookRecord::new("To Kill a Mockingbird", "Harper Lee", 10.99, "Fiction")
            .with_original_price(12.99)
            .available(false),
        BookRecord::new("Dune", "Frank Herbert", 8.99, "Science Fiction")
            .with_original_price(13.99)
            .bestseller(true),
        BookRecord::new("Pride and Prejudice", "Jane Austen", 7.49, "Romance")
            .with_original_price(7.49)
            .available(false),
    ]
}

/// Ordered book listing
#[derive(Debug, Clone, PartialEq)]
pub struct App {
    books: Vec<BookRecord>,
}

impl App {
    /// Create a listing over the given records. Titles are used as list
    /// keys and should be unique.
    pub fn new(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn books(&self) -> &[BookRecord] {
        &self.books
    }

    /// Render one card per record, preserving order
    pub fn render(&self) -> Node {
        let cards = self.books.iter().map(Node::from).collect();

        Node::with_class(
            Tag::Main,
            "app",
            vec![
                Node::with_class(Tag::heading(1), "app__title", vec![Node::text(PAGE_TITLE)]),
                Node::with_class(Tag::Section, "book-list", cards),
            ],
        )
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}
