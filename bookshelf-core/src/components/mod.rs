//! Components that render book records into a view tree

mod app;
mod book_card;

pub use app::{default_catalog, App};
pub use book_card::{BookCard, AVAILABLE_LABEL, BESTSELLER_BADGE, UNAVAILABLE_LABEL};
