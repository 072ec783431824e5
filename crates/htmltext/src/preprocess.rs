//! Markup cleanup before parsing.
//!
//! Line endings are unified, Office export artifacts are removed, stray
//! ampersands are escaped, and bare text is wrapped in a `<body>` so the
//! parser does not invent paragraphs around it.

use std::borrow::Cow;

use htmltext_core::whitespace::trim;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::html::parse_html;
use crate::{HtmlTextError, Node, Result};

pub use htmltext_core::fix_newlines;

/// Namespace Microsoft Office puts into exported HTML
pub const OFFICE_MARKER: &str = "urn:schemas-microsoft-com:office";

/// Office paragraph wrapper tags
const OFFICE_PARAGRAPH_TAGS: &[&str] = &["<o:p>", "</o:p>"];

static AMPERSAND: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)&(?:[a-z]+;|#[0-9]+;|#x[0-9a-f]+;)?").unwrap());

/// A parsed document ready for rendering
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub document: Node,
    pub is_office_document: bool,
}

/// Clean up and parse markup.
pub fn preprocess(markup: &str) -> Result<Preprocessed> {
    let is_office_document = is_office_document(markup);

    let markup = if is_office_document {
        log::debug!("office document detected, stripping office paragraphs");
        Cow::Owned(strip_office_paragraphs(markup))
    } else {
        Cow::Borrowed(markup)
    };

    let markup = fix_newlines(&markup);
    let document = load_document(&markup)?;

    Ok(Preprocessed {
        document,
        is_office_document,
    })
}

/// Check for the Office namespace marker anywhere in the markup
pub fn is_office_document(markup: &str) -> bool {
    markup.contains(OFFICE_MARKER)
}

/// Remove `<o:p>` and `</o:p>` tags
pub fn strip_office_paragraphs(markup: &str) -> String {
    OFFICE_PARAGRAPH_TAGS
        .iter()
        .fold(markup.to_string(), |markup, tag| markup.replace(tag, ""))
}

/// Escape every `&` that does not start a named or numeric entity
pub fn escape_ampersands(markup: &str) -> Cow<'_, str> {
    AMPERSAND.replace_all(markup, |caps: &Captures| {
        if caps[0].len() == 1 {
            "&amp;".to_string()
        } else {
            caps[0].to_string()
        }
    })
}

/// Parse markup into a document tree.
///
/// Empty input gives an empty document.
pub fn load_document(markup: &str) -> Result<Node> {
    let markup = trim(markup);

    if markup.is_empty() {
        log::trace!("empty markup, returning an empty document");
        return Ok(Node::document());
    }

    let markup = if markup.starts_with('<') {
        Cow::Borrowed(markup)
    } else {
        Cow::Owned(format!("<body>{}</body>", markup))
    };

    let markup = escape_ampersands(&markup);
    let document = parse_html(&markup);

    if document.children.is_empty() {
        return Err(HtmlTextError::load(
            "parser produced no document tree",
            markup.into_owned(),
        ));
    }

    Ok(document)
}
