//! View tree types produced by components

use serde::{Deserialize, Serialize};

/// Element kind
///
/// Heading levels outside 1..=6 are clamped on deserialization and read
/// back clamped by `name` and `heading_level`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", from = "RawTag")]
pub enum Tag {
    Main,
    Section,
    Article,
    Div,
    Paragraph,
    Span,

    /// Heading (h1-h6)
    Heading(u8),
}

/// Wire form of `Tag` before the heading level is clamped
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawTag {
    Main,
    Section,
    Article,
    Div,
    Paragraph,
    Span,
    Heading(u8),
}

impl From<RawTag> for Tag {
    fn from(raw: RawTag) -> Self {
        match raw {
            RawTag::Main => Tag::Main,
            RawTag::Section => Tag::Section,
            RawTag::Article => Tag::Article,
            RawTag::Div => Tag::Div,
            RawTag::Paragraph => Tag::Paragraph,
            RawTag::Span => Tag::Span,
            RawTag::Heading(level) => Tag::heading(level),
        }
    }
}

impl Tag {
    /// Create a heading tag, clamping the level to 1..=6
    pub fn heading(level: u8) -> Self {
        Tag::Heading(level.clamp(1, 6))
    }

    /// HTML element name
    pub fn name(self) -> &'static str {
        match self {
            Tag::Main => "main",
            Tag::Section => "section",
            Tag::Article => "article",
            Tag::Div => "div",
            Tag::Paragraph => "p",
            Tag::Span => "span",
            Tag::Heading(level) => match level.clamp(1, 6) {
                1 => "h1",
                2 => "h2",
                3 => "h3",
                4 => "h4",
                5 => "h5",
                _ => "h6",
            },
        }
    }

    /// Whether the element flows inline with its siblings
    pub fn is_inline(self) -> bool {
        matches!(self, Tag::Span)
    }

    pub fn heading_level(self) -> Option<u8> {
        match self {
            Tag::Heading(level) => Some(level.clamp(1, 6)),
            _ => None,
        }
    }
}

/// A node of the rendered view
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Node {
    /// Plain text
    Text(String),

    /// Element with optional CSS class and list key
    Element {
        tag: Tag,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        class: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        key: Option<String>,
        children: Vec<Node>,
    },
}

impl Node {
    /// Create a text node
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Create an element without class or key
    pub fn element(tag: Tag, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            class: None,
            key: None,
            children,
        }
    }

    /// Create an element with a CSS class
    pub fn with_class(tag: Tag, class: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Element {
            tag,
            class: Some(class.into()),
            key: None,
            children,
        }
    }

    /// Attach a list key to an element. Text nodes are returned unchanged.
    pub fn keyed(self, key: impl Into<String>) -> Self {
        match self {
            Node::Element {
                tag,
                class,
                children,
                ..
            } => Node::Element {
                tag,
                class,
                key: Some(key.into()),
                children,
            },
            text => text,
        }
    }

    pub fn tag(&self) -> Option<Tag> {
        match self {
            Node::Element { tag, .. } => Some(*tag),
            Node::Text(_) => None,
        }
    }

    pub fn class(&self) -> Option<&str> {
        match self {
            Node::Element { class, .. } => class.as_deref(),
            Node::Text(_) => None,
        }
    }

    pub fn key(&self) -> Option<&str> {
        match self {
            Node::Element { key, .. } => key.as_deref(),
            Node::Text(_) => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Element { children, .. } => children,
            Node::Text(_) => &[],
        }
    }

    /// All descendant text concatenated in document order
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(s) => out.push_str(s),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Text of the direct text children only, `None` when there are none
    pub fn own_text(&self) -> Option<String> {
        let mut texts = self.children().iter().filter_map(|child| match child {
            Node::Text(s) => Some(s.as_str()),
            Node::Element { .. } => None,
        });
        let first = texts.next()?;
        Some(texts.fold(first.to_string(), |mut acc, s| {
            acc.push_str(s);
            acc
        }))
    }

    /// Pre-order walk over this node and every descendant
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut out);
        out
    }

    fn walk<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in self.children() {
            child.walk(out);
        }
    }
}
