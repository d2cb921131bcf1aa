//! Bookshelf Core Library
//!
//! This crate provides the book record type and the components that render a
//! book listing. Components render to a small view tree which can be queried
//! by text and heading level, or handed to a renderer to produce HTML, plain
//! text or JSON.

pub mod components;
pub mod error;
pub mod render;
pub mod types;
pub mod view;

pub use components::{App, BookCard};
pub use error::{BookshelfError, QueryError, RenderError, Result};
pub use types::{BookRecord, Price};
pub use view::{Node, Screen, Tag, TextMatch};
