//! Document tree shared by the markdown serializer and the paste sanitizer.
//!
//! Both transforms take a read-only walk over this structure. Any HTML
//! parser can build it; the `notepanel` crate provides a scraper-backed
//! builder for HTML strings.

use crate::kind::ElementKind;

/// A node in a parsed rich-text fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text content.
    Text(String),
    /// An element with a tag name, attributes and ordered children.
    Element(Element),
}

/// An element node. Tag names are normalized to lowercase on construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Node {
    /// Create a text node.
    pub fn text(content: &str) -> Self {
        Node::Text(content.to_string())
    }

    /// Create an element node with no attributes.
    pub fn element(tag: &str) -> Self {
        Node::Element(Element::new(tag))
    }

    /// Create an element node with attributes.
    pub fn element_with_attrs(tag: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut element = Element::new(tag);
        for (name, value) in attrs {
            element.set_attr(name, value);
        }
        Node::Element(element)
    }

    /// Check if this is an element node.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    /// Check if this is a text node.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    /// Child nodes in document order. Text nodes have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Text(_) => &[],
            Node::Element(element) => element.children(),
        }
    }

    /// Append a child. Text nodes have no children; appending to one is a
    /// no-op.
    pub fn add_child(&mut self, child: Node) {
        if let Node::Element(element) = self {
            element.add_child(child);
        }
    }

    /// Attribute lookup by name. Always `None` for text nodes.
    pub fn attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Text(_) => None,
            Node::Element(element) => element.attr(name),
        }
    }

    /// All text content from this node and its descendants.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text_content(),
        }
    }
}

impl Element {
    /// Create an element with the given tag name.
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The closed classification used for transform dispatch.
    pub fn kind(&self) -> ElementKind {
        ElementKind::from_tag(&self.tag)
    }

    /// Attribute lookup by name (case-insensitive).
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(attr_name, _)| attr_name.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set an attribute, replacing any existing value.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let name_lower = name.to_lowercase();
        for (attr_name, attr_value) in &mut self.attributes {
            if *attr_name == name_lower {
                *attr_value = value.to_string();
                return;
            }
        }
        self.attributes.push((name_lower, value.to_string()));
    }

    /// Child nodes in document order.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append a child node.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// All text content from this element's descendants.
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
