//! Paste-input cleaning.
//!
//! Clipboard HTML is attacker-influenceable, and this filter is the only
//! control between a paste and the rich-text surface. The output is
//! restricted to the allow-listed tags plus `div`, and `href` on anchors is
//! the only attribute that ever survives. Hrefs carrying a script-capable
//! scheme are dropped with the rest.

use crate::kind::ElementKind;
use crate::node::{Element, Node};

/// URL schemes never allowed to survive on an anchor.
const BLOCKED_SCHEMES: &[&str] = &["javascript:", "data:", "vbscript:"];

/// Reduce a document tree to a restricted HTML string.
///
/// Total over any tree: allow-listed elements pass through bare (tag only),
/// spans unwrap, everything else is demoted to a plain `div` so its text
/// survives without its semantics.
pub fn sanitize(root: &Node) -> String {
    let mut out = String::with_capacity(64);
    sanitize_node(root, &mut out);
    out
}

fn sanitize_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => push_escaped_text(text, out),
        Node::Element(element) => sanitize_element(element, out),
    }
}

fn sanitize_children(element: &Element, out: &mut String) {
    for child in element.children() {
        sanitize_node(child, out);
    }
}

fn sanitize_element(element: &Element, out: &mut String) {
    match element.kind() {
        // Spans carry only styling in typical paste sources.
        ElementKind::Span => sanitize_children(element, out),

        ElementKind::LineBreak => out.push_str("<br>"),

        ElementKind::Anchor => {
            out.push_str("<a");
            if let Some(href) = element.attr("href").filter(|value| is_safe_href(value)) {
                out.push_str(" href=\"");
                push_escaped_attr(href, out);
                out.push('"');
            }
            out.push('>');
            sanitize_children(element, out);
            out.push_str("</a>");
        }

        kind if kind.is_allowed() => {
            out.push('<');
            out.push_str(element.tag());
            out.push('>');
            sanitize_children(element, out);
            out.push_str("</");
            out.push_str(element.tag());
            out.push('>');
        }

        _ => {
            out.push_str("<div>");
            sanitize_children(element, out);
            out.push_str("</div>");
        }
    }
}

/// Scheme check over a whitespace/control-stripped, case-folded view, so
/// `java\tscript:` and friends cannot slip past.
fn is_safe_href(value: &str) -> bool {
    let compact: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .collect::<String>()
        .to_ascii_lowercase();
    !BLOCKED_SCHEMES
        .iter()
        .any(|scheme| compact.starts_with(scheme))
}

/// Escape text for literal inclusion in an HTML fragment.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_escaped_text(text, &mut out);
    out
}

fn push_escaped_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn push_escaped_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
