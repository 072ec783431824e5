//! HTML parsing support.
//!
//! This module parses HTML strings with scraper and converts the result to the
//! [`Node`] tree rendered by `htmltext-core`.

use scraper::{Html, Node as ScraperNode};

use crate::Node;

/// Parse an HTML string into a Node tree.
///
/// The whole document is kept, doctype and comments included, so the
/// renderer sees the same siblings the parser produced.
///
/// # Example
///
/// ```rust
/// use htmltext::{parse_html, NodeType};
///
/// let document = parse_html("<!DOCTYPE html><h1>Hello <em>World</em></h1>");
/// assert_eq!(document.node_type, NodeType::Document);
/// assert_eq!(document.children[0].node_type, NodeType::Doctype);
/// ```
pub fn parse_html(html: &str) -> Node {
    let document = Html::parse_document(html);

    // html5ever accepts arbitrarily deep nesting, so the tree is copied with
    // an explicit stack of open elements
    let mut open = vec![(Node::document(), document.tree.root().children())];
    let mut root = Node::document();

    while let Some((_, children)) = open.last_mut() {
        match children.next() {
            Some(child) => {
                let Some(node) = convert_node(child.value()) else {
                    continue;
                };
                if node.is_element() {
                    open.push((node, child.children()));
                } else if let Some((parent, _)) = open.last_mut() {
                    parent.add_child(node);
                }
            }
            None => {
                let Some((node, _)) = open.pop() else {
                    break;
                };
                match open.last_mut() {
                    Some((parent, _)) => parent.add_child(node),
                    None => root = node,
                }
            }
        }
    }

    root
}

/// Convert one scraper node, without its children
fn convert_node(value: &ScraperNode) -> Option<Node> {
    match value {
        ScraperNode::Text(text) => Some(Node::text(&text.text)),
        ScraperNode::Element(element) => Some(Node::element_with_attrs(
            element.name(),
            element.attrs().collect(),
        )),
        ScraperNode::Comment(comment) => Some(Node::comment(&comment.comment)),
        ScraperNode::Doctype(doctype) => Some(Node::doctype(doctype.name())),
        ScraperNode::ProcessingInstruction(pi) => {
            Some(Node::processing_instruction(&pi.target, &pi.data))
        }
        _ => None,
    }
}
