//! # htmltext
//!
//! Convert HTML to readable plain text.
//!
//! The output approximates how a browser would show the document: paragraphs
//! separated by blank lines, lists bulleted with `- `, table cells separated
//! by tabs, links written as `[text](href)` and whitespace collapsed the way
//! browsers collapse it. The typical use is a text alternative for HTML email.
//!
//! ## Design
//!
//! ```text
//! bytes ─▶ charset ─▶ preprocess ─▶ scraper ─▶ Node ─▶ render ─▶ whitespace ─▶ text
//! ```
//!
//! Markup is parsed with [scraper](https://docs.rs/scraper) (html5ever) and
//! bridged into the parser-agnostic [`Node`] tree of `htmltext-core`, which
//! does the actual rendering.
//!
//! ## Example
//!
//! ```rust
//! use htmltext::{convert, Config};
//!
//! let text = convert("<p>Hello</p><p>World</p>", &Config::default()).unwrap();
//! assert_eq!(text, "Hello\n\nWorld");
//!
//! let html = r#"<a href="https://example.com">Click</a>"#;
//! assert_eq!(convert(html, &Config::default()).unwrap(), "[Click](https://example.com)");
//! assert_eq!(convert(html, &Config::without_links()).unwrap(), "Click");
//! ```

pub mod charset;
pub mod html;
pub mod preprocess;
mod service;

pub use html::parse_html;
pub use htmltext_core::{CharacterSet, Config, Node, NodeType, RenderContext};
pub use preprocess::{preprocess, Preprocessed};
pub use service::{convert, convert_bytes, convert_node, HtmlTextService};

/// Error type for htmltext operations
#[derive(Debug, thiserror::Error)]
pub enum HtmlTextError {
    /// The input could not be turned into a document tree
    #[error("Could not load HTML: {reason}")]
    Load {
        reason: String,
        /// The rejected markup, for diagnostics
        markup: String,
    },
}

impl HtmlTextError {
    pub(crate) fn load(reason: impl Into<String>, markup: impl Into<String>) -> Self {
        HtmlTextError::Load {
            reason: reason.into(),
            markup: markup.into(),
        }
    }

    /// The markup that failed to load
    pub fn markup(&self) -> &str {
        match self {
            HtmlTextError::Load { markup, .. } => markup,
        }
    }
}

pub type Result<T> = std::result::Result<T, HtmlTextError>;
