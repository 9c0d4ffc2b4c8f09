//! # notepanel-core
//!
//! Document tree and pure text transforms for the notepanel editor.
//!
//! The editor stores note bodies as rich-text HTML fragments. Two stateless
//! transforms operate on a parsed view of such fragments:
//!
//! - [`markdown::serialize`] projects a tree to markdown-flavored text for
//!   preview and export.
//! - [`sanitize::sanitize`] reduces untrusted paste input to a restricted,
//!   safe HTML string.
//!
//! Both accept the same [`Node`] tree and are total over any well-formed
//! input. This crate is parser agnostic: any HTML parser can build the tree
//! (the `notepanel` crate ships a scraper-backed builder).
//!
//! ## Example
//!
//! ```rust
//! use notepanel_core::{markdown, Node};
//!
//! let mut strong = Node::element("strong");
//! strong.add_child(Node::text("ship it"));
//!
//! assert_eq!(markdown::serialize(&strong), "**ship it**");
//! ```

pub mod kind;
pub mod markdown;
pub mod node;
pub mod sanitize;

pub use kind::ElementKind;
pub use markdown::serialize;
pub use node::{Element, Node};
pub use sanitize::{escape_text, sanitize};
