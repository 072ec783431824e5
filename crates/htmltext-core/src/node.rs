//! DOM-style node tree consumed by the renderer.
//!
//! This module provides a small owned tree that any HTML parser can convert
//! its output to. The `htmltext` crate builds it from scraper/html5ever, but
//! trees can also be assembled by hand.

use indexmap::IndexMap;

/// Node kinds the renderer distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeType {
    /// Element node
    Element,
    /// Text node
    Text,
    /// Comment node
    Comment,
    /// `<!DOCTYPE>` declaration
    Doctype,
    /// Processing instruction (`<?target data?>`)
    ProcessingInstruction,
    /// Document root
    Document,
}

/// A node in the document tree.
#[derive(Debug, Clone)]
pub struct Node {
    /// Node type
    pub node_type: NodeType,

    /// Node name (lowercase tag for elements, `#text`, `#comment`, `#document`,
    /// the declared name for doctypes, the target for processing instructions)
    pub node_name: String,

    /// Character data for text, comment and processing instruction nodes
    pub node_value: Option<String>,

    /// Attributes in source order. Only populated for elements.
    pub attributes: IndexMap<String, String>,

    /// Child nodes
    pub children: Vec<Node>,
}

impl Node {
    fn new(node_type: NodeType, node_name: &str, node_value: Option<&str>) -> Self {
        Self {
            node_type,
            node_name: node_name.to_string(),
            node_value: node_value.map(str::to_string),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::new(NodeType::Element, &tag_name.to_lowercase(), None)
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut node = Self::element(tag_name);
        for (name, value) in attrs {
            node.set_attr(name, value);
        }
        node
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::new(NodeType::Text, "#text", Some(content))
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Self::new(NodeType::Comment, "#comment", Some(content))
    }

    /// Create a doctype node
    pub fn doctype(name: &str) -> Self {
        Self::new(NodeType::Doctype, &name.to_lowercase(), None)
    }

    /// Create a processing instruction node
    pub fn processing_instruction(target: &str, data: &str) -> Self {
        Self::new(NodeType::ProcessingInstruction, target, Some(data))
    }

    /// Create an empty document node
    pub fn document() -> Self {
        Self::new(NodeType::Document, "#document", None)
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        self.node_type == NodeType::Element
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        self.node_type == NodeType::Text
    }

    /// Doctypes and processing instructions never contribute to the output
    /// and are skipped when looking at neighbouring siblings.
    pub fn is_ignorable(&self) -> bool {
        matches!(
            self.node_type,
            NodeType::Doctype | NodeType::ProcessingInstruction
        )
    }

    /// Get the node name, lowercased
    pub fn tag_name(&self) -> String {
        self.node_name.to_lowercase()
    }

    /// Get an attribute value by name (case-insensitive)
    pub fn attr(&self, name: &str) -> Option<&str> {
        if let Some(value) = self.attributes.get(name) {
            return Some(value.as_str());
        }
        self.attributes
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Check if an attribute exists
    pub fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }

    /// Get all child nodes
    pub fn children(&self) -> impl Iterator<Item = &Node> {
        self.children.iter()
    }

    /// Add a child node
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Set an attribute, replacing an existing one with the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        let existing = self
            .attributes
            .keys()
            .find(|key| key.eq_ignore_ascii_case(name))
            .cloned();

        match existing {
            Some(key) => {
                self.attributes.insert(key, value.to_string());
            }
            None => {
                self.attributes.insert(name.to_string(), value.to_string());
            }
        }
    }

    /// Get all text content from this node and descendants, in document order
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            match node.node_type {
                NodeType::Text => text.push_str(node.node_value.as_deref().unwrap_or("")),
                NodeType::Element | NodeType::Document => stack.extend(node.children.iter().rev()),
                _ => {}
            }
        }

        text
    }

    /// Number of nodes in this subtree, including this one
    pub fn subtree_len(&self) -> usize {
        let mut len = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            len += 1;
            stack.extend(node.children.iter());
        }

        len
    }
}

// Deep trees would overflow the stack with the recursive default drop
impl Drop for Node {
    fn drop(&mut self) {
        let mut stack = std::mem::take(&mut self.children);
        while let Some(mut node) = stack.pop() {
            stack.append(&mut node.children);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_element() {
        let node = Node::element("DIV");
        assert!(node.is_element());
        assert_eq!(node.tag_name(), "div");
        assert_eq!(node.node_name, "div");
    }

    #[test]
    fn test_create_text() {
        let node = Node::text("Hello World");
        assert!(node.is_text());
        assert_eq!(node.node_name, "#text");
        assert_eq!(node.text_content(), "Hello World");
    }

    #[test]
    fn test_attributes() {
        let node = Node::element_with_attrs(
            "a",
            vec![("href", "https://example.com"), ("Title", "Example")],
        );
        assert_eq!(node.attr("href"), Some("https://example.com"));
        assert_eq!(node.attr("title"), Some("Example"));
        assert_eq!(node.attr("class"), None);
        assert!(node.has_attr("TITLE"));
    }

    #[test]
    fn test_set_attr_replaces_in_place() {
        let mut node = Node::element_with_attrs("p", vec![("id", "a"), ("class", "x")]);
        node.set_attr("ID", "b");
        let attrs: Vec<_> = node.attributes.iter().collect();
        assert_eq!(attrs.len(), 2);
        assert_eq!(node.attr("id"), Some("b"));
        assert_eq!(attrs[0].0, "id");
    }

    #[test]
    fn test_ignorable() {
        assert!(Node::doctype("html").is_ignorable());
        assert!(Node::processing_instruction("xml", "version=\"1.0\"").is_ignorable());
        assert!(!Node::comment("note").is_ignorable());
        assert!(!Node::text(" ").is_ignorable());
    }

    #[test]
    fn test_children() {
        let mut parent = Node::element("div");
        parent.add_child(Node::text("Hello"));
        parent.add_child(Node::element("span"));
        parent.add_child(Node::comment("hidden"));
        parent.add_child(Node::text("World"));

        assert_eq!(parent.children().count(), 4);
        assert_eq!(parent.children().filter(|n| n.is_element()).count(), 1);
        assert_eq!(parent.subtree_len(), 5);
    }

    #[test]
    fn test_text_content() {
        let mut div = Node::element("div");
        div.add_child(Node::text("Hello "));
        div.add_child(Node::comment("skipped"));
        let mut span = Node::element("span");
        span.add_child(Node::text("World"));
        div.add_child(span);

        assert_eq!(div.text_content(), "Hello World");
    }

    #[test]
    fn test_deep_tree() {
        let mut node = Node::text("deep");
        for _ in 0..5000 {
            let mut div = Node::element("div");
            div.add_child(node);
            node = div;
        }

        assert_eq!(node.subtree_len(), 5001);
        assert_eq!(node.text_content(), "deep");
        drop(node);
    }
}
