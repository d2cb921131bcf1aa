//! Rendered view tree and the queries run against it

mod node;
mod query;

pub use node::{Node, Tag};
pub use query::{Screen, TextMatch};
