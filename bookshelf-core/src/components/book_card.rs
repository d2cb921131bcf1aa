//! Card displaying a single book

use crate::types::BookRecord;
use crate::view::{Node, Tag};

/// Label shown on bestseller cards
pub const BESTSELLER_BADGE: &str = "BESTSELLER";

/// Label for purchasable books
pub const AVAILABLE_LABEL: &str = "Available";

/// Label for books that cannot be purchased
pub const UNAVAILABLE_LABEL: &str = "Not Available";

/// Presentational card for one book record
///
/// Layout, in order: title heading (h3), author line, genre line, pricing
/// row, bestseller badge, availability label. The original price and the
/// badge only appear on bestsellers. Each label is its own element.
pub struct BookCard<'a> {
    book: &'a BookRecord,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a BookRecord) -> Self {
        Self { book }
    }

    /// Render the card, keyed by the book title
    pub fn render(&self) -> Node {
        let book = self.book;
        let mut children = vec![
            Node::with_class(
                Tag::heading(3),
                "book-card__title",
                vec![Node::text(&book.title)],
            ),
            Node::with_class(
                Tag::Paragraph,
                "book-card__author",
                vec![Node::text(format!("Author: {}", book.author))],
            ),
            Node::with_class(
                Tag::Paragraph,
                "book-card__genre",
                vec![Node::text(format!("Genre: {}", book.genre))],
            ),
            self.pricing(),
        ];

        if book.is_bestseller {
            children.push(Node::with_class(
                Tag::Span,
                "book-card__badge",
                vec![Node::text(BESTSELLER_BADGE)],
            ));
        }

        children.push(self.availability());

        Node::with_class(Tag::Article, "book-card", children).keyed(&book.title)
    }

    fn pricing(&self) -> Node {
        let book = self.book;
        let mut prices = vec![Node::with_class(
            Tag::Span,
            "book-card__price",
            vec![Node::text(book.current_price().to_string())],
        )];

        if book.is_bestseller {
            prices.push(Node::with_class(
                Tag::Span,
                "book-card__original-price",
                vec![Node::text(book.reference_price().to_string())],
            ));
        }

        Node::with_class(Tag::Div, "book-card__pricing", prices)
    }

    fn availability(&self) -> Node {
        let (class, label) = if self.book.is_available {
            ("book-card__availability book-card__availability--in-stock", AVAILABLE_LABEL)
        } else {
            ("book-card__availability book-card__availability--out-of-stock", UNAVAILABLE_LABEL)
        };
        Node::with_class(Tag::Paragraph, class, vec![Node::text(label)])
    }
}

impl From<&BookRecord> for Node {
    fn from(book: &BookRecord) -> Self {
        BookCard::new(book).render()
    }
}
