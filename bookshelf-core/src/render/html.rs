//! HTML renderer

use super::Renderer;
use crate::error::RenderError;
use crate::view::Node;
use std::io::Write;

/// Page configuration for HTML output
#[derive(Debug, Clone)]
pub struct PageOptions {
    /// Wrap the fragment in a full HTML5 document
    pub document: bool,
    /// Document title, used only when `document` is set
    pub title: String,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            document: false,
            title: "Book Library".to_string(),
        }
    }
}

/// Renderer producing indented HTML
pub struct HtmlRenderer {
    pub page_options: PageOptions,
}

impl HtmlRenderer {
    pub fn new() -> Self {
        Self {
            page_options: PageOptions::default(),
        }
    }

    /// Set page options
    pub fn with_page_options(mut self, options: PageOptions) -> Self {
        self.page_options = options;
        self
    }

    /// Convert a view to an HTML fragment
    pub fn view_to_html(&self, view: &Node) -> String {
        let mut html = String::new();
        self.node_to_html(view, 0, &mut html);
        html
    }

    fn node_to_html(&self, node: &Node, depth: usize, html: &mut String) {
        let indent = "  ".repeat(depth);
        match node {
            Node::Text(s) => {
                html.push_str(&indent);
                html.push_str(&escape_html(s));
                html.push('\n');
            }
            Node::Element {
                tag,
                class,
                key,
                children,
            } => {
                let name = tag.name();
                let mut attrs = String::new();
                if let Some(class) = class {
                    attrs.push_str(&format!(" class=\"{}\"", escape_html(class)));
                }
                if let Some(key) = key {
                    attrs.push_str(&format!(" data-key=\"{}\"", escape_html(key)));
                }

                if children.iter().all(|c| matches!(c, Node::Text(_))) {
                    let text: String = children
                        .iter()
                        .map(|c| escape_html(&c.text_content()))
                        .collect();
                    html.push_str(&format!("{indent}<{name}{attrs}>{text}</{name}>\n"));
                } else {
                    html.push_str(&format!("{indent}<{name}{attrs}>\n"));
                    for child in children {
                        self.node_to_html(child, depth + 1, html);
                    }
                    html.push_str(&format!("{indent}</{name}>\n"));
                }
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for HtmlRenderer {
    fn render(&self, view: &Node, writer: &mut dyn Write) -> Result<(), RenderError> {
        let fragment = self.view_to_html(view);
        if self.page_options.document {
            write!(
                writer,
                "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
                escape_html(&self.page_options.title),
                fragment
            )?;
        } else {
            writer.write_all(fragment.as_bytes())?;
        }
        Ok(())
    }

    fn format_name(&self) -> &str {
        "HTML"
    }

    fn file_extension(&self) -> &str {
        "html"
    }

    fn mime_type(&self) -> &str {
        "text/html"
    }
}

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
