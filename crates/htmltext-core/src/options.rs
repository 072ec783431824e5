//! Configuration options for plain text conversion

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Character set used to decode raw input bytes before parsing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CharacterSet {
    /// Detect from a byte order mark, UTF-8 validity or a `<meta>` declaration
    #[default]
    Auto,
    /// An explicit encoding label, e.g. `windows-1252` or `iso-8859-1`
    Named(String),
}

impl FromStr for CharacterSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("auto") {
            Ok(CharacterSet::Auto)
        } else {
            Ok(CharacterSet::Named(s.to_string()))
        }
    }
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Auto => f.write_str("auto"),
            CharacterSet::Named(label) => f.write_str(label),
        }
    }
}

/// Options for HTML to text conversion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Emit link text only: never `(href)` and never `[name]` anchors.
    /// Defaults to `false`.
    pub drop_links: bool,

    /// Decoding applied to byte input. Ignored for `&str` input, which is
    /// already decoded. Defaults to [`CharacterSet::Auto`].
    pub character_set: CharacterSet,
}

impl Config {
    /// Config with link targets dropped
    pub fn without_links() -> Self {
        Self {
            drop_links: true,
            ..Default::default()
        }
    }
}

/// Per-conversion settings handed down the render recursion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// See [`Config::drop_links`]
    pub drop_links: bool,

    /// The source markup came from a Microsoft Office export
    pub is_office_document: bool,
}

impl RenderContext {
    /// Context for one conversion under `config`
    pub fn new(config: &Config, is_office_document: bool) -> Self {
        Self {
            drop_links: config.drop_links,
            is_office_document,
        }
    }
}
