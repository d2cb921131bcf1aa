//! Text and heading queries over a rendered view
//!
//! An element matches a text query when it has direct text children and the
//! normalized concatenation of those children satisfies the matcher. Text
//! nested in child elements belongs to the child, so `<p>Not Available</p>`
//! does not match an exact `"Available"` query.

use super::{Node, Tag};
use crate::error::QueryError;
use regex::Regex;
use std::fmt;

/// Matcher applied to an element's normalized own text
#[derive(Debug, Clone)]
pub enum TextMatch {
    /// Whole-string equality
    Exact(String),

    /// Regex search anywhere in the text
    Pattern(Regex),
}

impl TextMatch {
    /// Compile a regex matcher
    pub fn pattern(re: &str) -> Result<Self, regex::Error> {
        Regex::new(re).map(TextMatch::Pattern)
    }

    pub fn matches(&self, text: &str) -> bool {
        match self {
            TextMatch::Exact(expected) => text == expected,
            TextMatch::Pattern(re) => re.is_match(text),
        }
    }
}

impl From<&str> for TextMatch {
    fn from(s: &str) -> Self {
        TextMatch::Exact(s.to_string())
    }
}

impl fmt::Display for TextMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextMatch::Exact(s) => write!(f, "text \"{}\"", s),
            TextMatch::Pattern(re) => write!(f, "pattern /{}/", re.as_str()),
        }
    }
}

/// Trim and collapse runs of whitespace into single spaces
fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Query wrapper over a rendered view
pub struct Screen<'a> {
    root: &'a Node,
}

impl<'a> Screen<'a> {
    pub fn new(root: &'a Node) -> Self {
        Self { root }
    }

    /// All elements whose own text matches, in document order
    pub fn query_all_by_text(&self, matcher: impl Into<TextMatch>) -> Vec<&'a Node> {
        let matcher = matcher.into();
        self.find_text(&matcher)
    }

    /// At most one matching element
    pub fn query_by_text(
        &self,
        matcher: impl Into<TextMatch>,
    ) -> Result<Option<&'a Node>, QueryError> {
        let matcher = matcher.into();
        let found = self.find_text(&matcher);
        match found.len() {
            0 => Ok(None),
            1 => Ok(Some(found[0])),
            count => Err(QueryError::MultipleFound {
                matcher: matcher.to_string(),
                count,
            }),
        }
    }

    /// Exactly one matching element
    pub fn get_by_text(&self, matcher: impl Into<TextMatch>) -> Result<&'a Node, QueryError> {
        let matcher = matcher.into();
        let found = self.find_text(&matcher);
        match found.len() {
            0 => Err(QueryError::NotFound {
                matcher: matcher.to_string(),
            }),
            1 => Ok(found[0]),
            count => Err(QueryError::MultipleFound {
                matcher: matcher.to_string(),
                count,
            }),
        }
    }

    /// One or more matching elements
    pub fn get_all_by_text(
        &self,
        matcher: impl Into<TextMatch>,
    ) -> Result<Vec<&'a Node>, QueryError> {
        let matcher = matcher.into();
        let found = self.find_text(&matcher);
        if found.is_empty() {
            return Err(QueryError::NotFound {
                matcher: matcher.to_string(),
            });
        }
        Ok(found)
    }

    /// Headings of the given level, possibly none
    pub fn query_all_by_heading(&self, level: u8) -> Vec<&'a Node> {
        self.root
            .descendants()
            .into_iter()
            .filter(|node| node.tag().and_then(Tag::heading_level) == Some(level))
            .collect()
    }

    /// Headings of the given level, at least one
    pub fn get_all_by_heading(&self, level: u8) -> Result<Vec<&'a Node>, QueryError> {
        let found = self.query_all_by_heading(level);
        if found.is_empty() {
            return Err(QueryError::NotFound {
                matcher: format!("heading level {}", level),
            });
        }
        Ok(found)
    }

    fn find_text(&self, matcher: &TextMatch) -> Vec<&'a Node> {
        self.root
            .descendants()
            .into_iter()
            .filter(|node| {
                node.own_text()
                    .map(|text| matcher.matches(&normalize(&text)))
                    .unwrap_or(false)
            })
            .collect()
    }
}
