//! The book record - one entry of the listing

use super::Price;
use serde::{Deserialize, Serialize};

/// Display attributes of one book
///
/// Every field is required. Serialized keys use camelCase
/// (`originalPrice`, `isAvailable`, `isBestseller`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    /// Book title, also the list key when rendered in a collection
    pub title: String,

    /// Author name
    pub author: String,

    /// Current price
    pub price: f64,

    /// Reference price, shown next to the current price for bestsellers
    pub original_price: f64,

    /// Free-form category label
    pub genre: String,

    /// Whether the book can be purchased
    pub is_available: bool,

    /// Whether the book carries the bestseller badge
    pub is_bestseller: bool,
}

impl BookRecord {
    /// Create an available, non-bestseller record priced at `price`
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        price: f64,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            price,
            original_price: price,
            genre: genre.into(),
            is_available: true,
            is_bestseller: false,
        }
    }

    /// Set the reference price
    pub fn with_original_price(mut self, original_price: f64) -> Self {
        self.original_price = original_price;
        self
    }

    /// Set availability
    pub fn available(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// Set the bestseller flag
    pub fn bestseller(mut self, is_bestseller: bool) -> Self {
        self.is_bestseller = is_bestseller;
        self
    }

    pub fn current_price(&self) -> Price {
        Price(self.price)
    }

    pub fn reference_price(&self) -> Price {
        Price(self.original_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let book = BookRecord::new("Dune", "Frank Herbert", 9.99, "Science Fiction")
            .with_original_price(14.99)
            .available(false)
            .bestseller(true);

        assert_eq!(book.original_price, 14.99);
        assert!(!book.is_available);
        assert!(book.is_bestseller);
        assert_eq!(book.reference_price().to_string(), "$14.99");
    }

    #[test]
    fn test_camel_case_keys() {
        let book = BookRecord::new("1984", "George Orwell", 12.99, "Dystopian");
        let json = serde_json::to_value(&book).unwrap();

        assert_eq!(json["originalPrice"], 12.99);
        assert_eq!(json["isAvailable"], true);
        assert_eq!(json["isBestseller"], false);
    }

    #[test]
    fn test_missing_field_rejected() {
        let json = r#"{"title":"1984","author":"George Orwell","price":12.99,"genre":"Dystopian","isAvailable":true,"isBestseller":false}"#;
        let result: Result<BookRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
