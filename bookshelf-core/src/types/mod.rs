//! Core data types for the book listing

mod price;
mod record;

pub use price::Price;
pub use record::BookRecord;
