//! Render a node tree to plain text
//!
//! Every node produces a text fragment. Elements emit a prefix, the
//! concatenated fragments of their children, and then a suffix or a
//! transformation of the whole fragment (links, images, blockquotes).
//! Formatting of a node depends on its neighbours, so the walk tracks the
//! last *visible* sibling and peeks at the next one.

use crate::node::{Node, NodeType};
use crate::options::RenderContext;
use crate::whitespace::{
    collapse_whitespace, is_whitespace, process_whitespace_newlines, render_text,
    strip_line_trailing_space, trim, ARMOR,
};

/// Line emitted for `<hr>`
pub const HORIZONTAL_RULE: &str =
    "---------------------------------------------------------------\n";

/// Elements carrying this attribute are dropped with their content
pub const HIDDEN_PLAINTEXT_ATTR: &str = "data-hidden-plaintext";

/// Class Office exports put on paragraphs that behave like line breaks
pub const OFFICE_NORMAL_CLASS: &str = "MsoNormal";

/// Elements nested deeper than this render as their plain text content
pub const MAX_DEPTH: usize = 128;

/// The elements the renderer formats. Anything else renders its children
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading(u8),
    OrderedList,
    UnorderedList,
    Pre,
    TableCell,
    TableRow,
    Paragraph,
    Division,
    ListItem,
    LineBreak,
    HorizontalRule,
    Anchor,
    Image,
    Blockquote,
    /// `style`, `head`, `title`, `meta` and `script`: no output at all
    Ignored,
    Other,
}

impl ElementKind {
    /// Classify a tag name (case-insensitive)
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => ElementKind::Heading(1),
            "h2" => ElementKind::Heading(2),
            "h3" => ElementKind::Heading(3),
            "h4" => ElementKind::Heading(4),
            "h5" => ElementKind::Heading(5),
            "h6" => ElementKind::Heading(6),
            "ol" => ElementKind::OrderedList,
            "ul" => ElementKind::UnorderedList,
            "pre" => ElementKind::Pre,
            "td" | "th" => ElementKind::TableCell,
            "tr" => ElementKind::TableRow,
            "p" => ElementKind::Paragraph,
            "div" => ElementKind::Division,
            "li" => ElementKind::ListItem,
            "br" => ElementKind::LineBreak,
            "hr" => ElementKind::HorizontalRule,
            "a" => ElementKind::Anchor,
            "img" => ElementKind::Image,
            "blockquote" => ElementKind::Blockquote,
            "style" | "head" | "title" | "meta" | "script" => ElementKind::Ignored,
            _ => ElementKind::Other,
        }
    }

    /// True for `h1` through `h6`
    pub fn is_heading(self) -> bool {
        matches!(self, ElementKind::Heading(_))
    }
}

/// Names of the visible siblings around a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Siblings<'a> {
    /// The last visible sibling rendered before this node
    pub previous: Option<&'a str>,
    /// The next visible sibling in document order
    pub next: Option<&'a str>,
}

/// Render a whole tree.
pub fn render_document(root: &Node, ctx: RenderContext) -> String {
    log::trace!("rendering {} nodes", root.subtree_len());
    render(root, Siblings::default(), false, ctx)
}

/// Render a single node and its subtree.
///
/// `in_pre` is set for every descendant of a `<pre>` element. Elements
/// deeper than [`MAX_DEPTH`] below `node` lose their formatting and render
/// as text.
pub fn render(node: &Node, siblings: Siblings<'_>, in_pre: bool, ctx: RenderContext) -> String {
    render_at(node, siblings, in_pre, 0, ctx)
}

fn render_at(
    node: &Node,
    siblings: Siblings<'_>,
    in_pre: bool,
    depth: usize,
    ctx: RenderContext,
) -> String {
    match node.node_type {
        NodeType::Text => {
            let value = node.node_value.as_deref().unwrap_or("");
            if in_pre {
                render_preformatted_text(value)
            } else {
                render_flow_text(value, siblings.previous)
            }
        }
        NodeType::Doctype | NodeType::ProcessingInstruction | NodeType::Comment => String::new(),
        NodeType::Document => render_children(node, in_pre, depth, ctx),
        NodeType::Element => render_element(node, siblings, in_pre, depth, ctx),
    }
}

fn render_preformatted_text(value: &str) -> String {
    let rendered = render_text(value);
    let text = format!("\n{}\n", rendered.trim_matches(&['\n', '\r', '\t', ' '][..]));
    strip_line_trailing_space(&text).replace('\n', &ARMOR.to_string())
}

fn render_flow_text(value: &str, previous: Option<&str>) -> String {
    let text = collapse_whitespace(&render_text(value));

    if !is_whitespace(&text) && matches!(previous, Some("p") | Some("div")) {
        return format!("\n{}", text);
    }

    text
}

fn render_element(
    node: &Node,
    siblings: Siblings<'_>,
    in_pre: bool,
    depth: usize,
    ctx: RenderContext,
) -> String {
    if node.has_attr(HIDDEN_PLAINTEXT_ATTR) {
        return String::new();
    }

    let mut kind = ElementKind::from_tag(&node.node_name);

    if kind == ElementKind::Ignored {
        return String::new();
    }

    if depth >= MAX_DEPTH {
        return render_flattened(node, siblings, in_pre || kind == ElementKind::Pre);
    }

    let prefix = match kind {
        ElementKind::HorizontalRule => {
            return match siblings.previous {
                Some(_) => format!("\n{}", HORIZONTAL_RULE),
                None => HORIZONTAL_RULE.to_string(),
            };
        }
        ElementKind::Heading(_)
        | ElementKind::OrderedList
        | ElementKind::UnorderedList
        | ElementKind::Pre => "\n\n",
        ElementKind::TableCell => "\t",
        ElementKind::Paragraph
            if ctx.is_office_document && node.attr("class") == Some(OFFICE_NORMAL_CLASS) =>
        {
            // Office paragraphs behave like line returns
            kind = ElementKind::LineBreak;
            ""
        }
        ElementKind::Paragraph => "\n\n",
        ElementKind::TableRow => "\n",
        ElementKind::Division if siblings.previous.is_some() => "\n",
        ElementKind::ListItem => "- ",
        _ => "",
    };

    let mut output = String::from(prefix);
    output.push_str(&render_children(
        node,
        in_pre || kind == ElementKind::Pre,
        depth,
        ctx,
    ));

    match kind {
        ElementKind::Heading(_) | ElementKind::Pre | ElementKind::Paragraph => {
            output.push_str("\n\n");
            output
        }
        ElementKind::LineBreak | ElementKind::ListItem => {
            output.push('\n');
            output
        }
        ElementKind::Anchor => finish_anchor(node, &output, siblings, ctx),
        ElementKind::Image => finish_image(node),
        ElementKind::Blockquote => finish_blockquote(&output),
        _ => output,
    }
}

fn render_flattened(node: &Node, siblings: Siblings<'_>, in_pre: bool) -> String {
    log::debug!(
        "<{}> nested deeper than {} levels, rendering as text",
        node.node_name,
        MAX_DEPTH
    );
    let text = node.text_content();
    if in_pre {
        render_preformatted_text(&text)
    } else {
        render_flow_text(&text, siblings.previous)
    }
}

/// Render the children of `node` in order and join their fragments.
fn render_children(node: &Node, in_pre: bool, depth: usize, ctx: RenderContext) -> String {
    let children = &node.children;
    let mut parts: Vec<String> = Vec::with_capacity(children.len());
    let mut visible_names: Vec<String> = Vec::new();
    let mut trailing_whitespace = 0;

    for (index, child) in children.iter().enumerate() {
        // only anchors look at what follows them
        let next = if child.is_element()
            && ElementKind::from_tag(&child.node_name) == ElementKind::Anchor
        {
            next_visible_name(&children[index + 1..])
        } else {
            None
        };
        let siblings = Siblings {
            previous: visible_names.last().map(String::as_str),
            next: next.as_deref(),
        };

        let text = render_at(child, siblings, in_pre, depth + 1, ctx);

        if child.is_ignorable() || (child.is_text() && is_whitespace(&text)) {
            // invisible: keeps the previous sibling name
            trailing_whitespace += 1;
        } else {
            visible_names.push(child.tag_name());
            trailing_whitespace = 0;
        }

        parts.push(text);
    }

    parts.truncate(parts.len() - trailing_whitespace);

    // a closing br right after text would add an extra blank line
    if let [.., before, last] = visible_names.as_slice() {
        if last == "br" && before == "#text" {
            parts.pop();
        }
    }

    parts.concat()
}

/// Name of the first following sibling that is an element or non-blank text
pub fn next_visible_name(following: &[Node]) -> Option<String> {
    following
        .iter()
        .find(|node| match node.node_type {
            NodeType::Element => true,
            NodeType::Text => !is_whitespace(node.node_value.as_deref().unwrap_or("")),
            _ => false,
        })
        .map(Node::tag_name)
}

fn finish_anchor(node: &Node, content: &str, siblings: Siblings<'_>, ctx: RenderContext) -> String {
    let href = node.attr("href").unwrap_or("");
    let title = node.attr("title").filter(|t| !t.is_empty());

    let mut output = trim(content).to_string();

    // linked image: drop the image brackets, the link title wins
    if output.starts_with('[') && output.ends_with(']') {
        output = output[1..output.len() - 1].to_string();
        if let Some(title) = title {
            output = title.to_string();
        }
    }

    if output.is_empty() {
        if let Some(title) = title {
            output = title.to_string();
        }
    }

    if href.is_empty() {
        let named = node.attr("name").is_some_and(|name| !name.is_empty());
        if named && !ctx.drop_links {
            output = format!("[{}]", output);
        }
    } else if is_self_link(href, &output) {
        // the text already says where it goes
    } else if output.is_empty() {
        output = href.to_string();
    } else if !ctx.drop_links {
        output = format!("[{}]({})", output, href);
    }

    if siblings.next.is_some_and(|name| ElementKind::from_tag(name).is_heading()) {
        output.push('\n');
    }

    output
}

/// True when `href` is the text itself, or the text behind a `mailto:`,
/// `http://` or `https://` scheme.
pub fn is_self_link(href: &str, text: &str) -> bool {
    ["", "mailto:", "http://", "https://"]
        .iter()
        .any(|scheme| href.strip_prefix(scheme) == Some(text))
}

fn finish_image(node: &Node) -> String {
    ["title", "alt"]
        .iter()
        .filter_map(|name| node.attr(name))
        .find(|value| !value.is_empty())
        .map(|value| format!("[{}]", value))
        .unwrap_or_default()
}

fn finish_blockquote(content: &str) -> String {
    let body = format!("\n{}", process_whitespace_newlines(content));
    let quoted = body.replace('\n', "\n> ").replace("\n> >", "\n>>");
    format!("\n{}\n\n", quoted)
}
