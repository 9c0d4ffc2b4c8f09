//! Document tree to markdown-flavored text.
//!
//! A best-effort, lossy projection: the output feeds an external markdown
//! renderer for preview and is written verbatim on export. Text is emitted
//! unescaped, so markdown-significant characters in note text reach the
//! renderer as markdown.

use crate::kind::ElementKind;
use crate::node::{Element, Node};

/// Serialize a document tree to markdown-flavored text.
///
/// Total over any tree. Elements outside the vocabulary contribute their
/// children with no markup.
pub fn serialize(root: &Node) -> String {
    let mut out = String::with_capacity(64);
    serialize_node(root, &mut out);
    out
}

fn serialize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(text),
        Node::Element(element) => serialize_element(element, out),
    }
}

fn serialize_children(element: &Element, out: &mut String) {
    for child in element.children() {
        serialize_node(child, out);
    }
}

fn serialize_element(element: &Element, out: &mut String) {
    match element.kind() {
        ElementKind::LineBreak => out.push('\n'),

        ElementKind::Paragraph | ElementKind::Div => {
            out.push('\n');
            serialize_children(element, out);
            out.push('\n');
        }

        ElementKind::UnorderedList => {
            for item in list_items(element) {
                out.push_str("\n- ");
                serialize_children(item, out);
            }
            out.push('\n');
        }

        ElementKind::OrderedList => {
            // Counter is local to this list; nested lists restart at 1
            // through recursion.
            for (index, item) in list_items(element).enumerate() {
                out.push('\n');
                out.push_str(&(index + 1).to_string());
                out.push_str(". ");
                serialize_children(item, out);
            }
            out.push('\n');
        }

        // The marker comes from the enclosing list handler; a bare list
        // item outside a list yields unmarked text.
        ElementKind::ListItem => serialize_children(element, out),

        ElementKind::Strong => delimit(element, "**", out),
        ElementKind::Emphasis => delimit(element, "*", out),
        ElementKind::Code => delimit(element, "`", out),

        ElementKind::Anchor => {
            out.push('[');
            serialize_children(element, out);
            out.push_str("](");
            out.push_str(element.attr("href").unwrap_or(""));
            out.push(')');
        }

        ElementKind::Heading(level) => serialize_heading(element, level, out),

        ElementKind::BlockQuote => serialize_blockquote(element, out),

        ElementKind::Preformatted | ElementKind::Span | ElementKind::Other => {
            serialize_children(element, out)
        }
    }
}

fn list_items(element: &Element) -> impl Iterator<Item = &Element> {
    element.children().iter().filter_map(|child| match child {
        Node::Element(item) if item.kind() == ElementKind::ListItem => Some(item),
        _ => None,
    })
}

fn delimit(element: &Element, delimiter: &str, out: &mut String) {
    out.push_str(delimiter);
    serialize_children(element, out);
    out.push_str(delimiter);
}

fn serialize_heading(element: &Element, level: u8, out: &mut String) {
    let mut inner = String::new();
    serialize_children(element, &mut inner);
    let content = inner.trim();
    if content.is_empty() {
        return;
    }

    out.push('\n');
    for _ in 0..level {
        out.push('#');
    }
    out.push(' ');
    out.push_str(content);
    out.push('\n');
}

fn serialize_blockquote(element: &Element, out: &mut String) {
    let mut inner = String::new();
    serialize_children(element, &mut inner);
    let content = inner.trim();
    if content.is_empty() {
        return;
    }

    out.push('\n');
    for line in content.lines() {
        out.push('>');
        if !line.is_empty() {
            out.push(' ');
            out.push_str(line);
        }
        out.push('\n');
    }
}
