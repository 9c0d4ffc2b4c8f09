//! HTML string boundary.
//!
//! Adapts scraper's fragment parser to the core document tree and hosts the
//! string-level export and paste pipelines. Note bodies are stored as HTML
//! fragment strings, so everything here works on fragments, never full
//! documents.

use scraper::{ElementRef, Html, Node as ScraperNode};

use notepanel_core::{markdown, sanitize, Node};

/// Parse an HTML fragment into a document tree.
///
/// The returned node is the fragment wrapper element; the parsed content is
/// its children.
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper element to the core tree structure.
fn scraper_to_node(element: ElementRef) -> Node {
    let tag = element.value().name();
    let attrs: Vec<(&str, &str)> = element.value().attrs().collect();

    let mut node = if attrs.is_empty() {
        Node::element(tag)
    } else {
        Node::element_with_attrs(tag, attrs)
    };

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => {
                node.add_child(Node::text(&text.text));
            }
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}

/// Serialize an HTML fragment string to markdown-flavored text.
pub fn html_to_markdown(html: &str) -> String {
    let root = parse_html(html);
    let mut out = String::new();
    for child in root.children() {
        out.push_str(&markdown::serialize(child));
    }
    out
}

/// Clean clipboard HTML down to the allow-listed structure.
pub fn clean_pasted_html(html: &str) -> String {
    let root = parse_html(html);
    let mut out = String::new();
    for child in root.children() {
        out.push_str(&sanitize::sanitize(child));
    }
    out
}

/// Convert plain clipboard text to an HTML fragment: markup-significant
/// characters are escaped and newlines become `<br>`.
pub fn plain_text_to_html(text: &str) -> String {
    sanitize::escape_text(text).replace('\n', "<br>")
}
