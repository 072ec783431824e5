//! htmltext-core - node tree, renderer and whitespace normalization
//!
//! This crate turns a parsed document tree into plain text that reads the way
//! a browser would show it: paragraphs separated by blank lines, bulleted
//! lists, tab-separated table cells and `[text](href)` links. It carries no
//! HTML parser; `htmltext` builds the tree from markup, and any other parser
//! can produce a [`Node`] tree as well.
//!
//! # Architecture
//!
//! ```text
//!              ┌────────┐  raw text   ┌────────────┐
//! Node tree ──▶│ render │ ──────────▶ │ whitespace │ ──▶ plain text
//!              └────────┘             └────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmltext_core::{render_to_text, Config, Node};
//!
//! let mut p = Node::element("p");
//! p.add_child(Node::text("Hello   World"));
//!
//! let text = render_to_text(&p, &Config::default());
//! assert_eq!(text, "Hello World");
//! ```

pub mod node;
mod options;
pub mod render;
pub mod whitespace;

pub use node::{Node, NodeType};
pub use options::{CharacterSet, Config, RenderContext};
pub use render::{render, render_document, ElementKind, Siblings};
pub use whitespace::{fix_newlines, is_whitespace, process_whitespace_newlines, render_text};

/// Render a tree and normalize the result.
///
/// Office paragraph handling is off; use [`render_document`] with a
/// [`RenderContext`] to turn it on.
pub fn render_to_text(root: &Node, config: &Config) -> String {
    let ctx = RenderContext::new(config, false);
    process_whitespace_newlines(&render_document(root, ctx))
}
