//! Whitespace and newline normalization
//!
//! Applied once to the whole rendered output, and to the body of every
//! blockquote before it is quoted.

use once_cell::sync::Lazy;
use regex::Regex;

/// Placeholder for newlines inside preformatted text. Input is run through
/// [`fix_newlines`] before rendering, so a carriage return never survives to
/// this point on its own.
pub const ARMOR: char = '\r';

/// Characters stripped by the whole-text trims: space, tab, newline,
/// carriage return, NUL and vertical tab.
const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Characters that make a string blank for [`is_whitespace`]
const BLANK_CHARS: &[char] = &['\n', '\r', '\t', ' '];

/// Non-breaking space, as a code point and as an escape sequence
pub const NBSP_CODES: &[&str] = &["\u{a0}", "\\u00a0"];

/// Zero-width non-joiner, as a code point and as an escape sequence
pub const ZWNJ_CODES: &[&str] = &["\u{200c}", "\\u200c"];

static SPACES_AROUND_TAB: Lazy<Regex> = Lazy::new(|| Regex::new(r" *\t *").unwrap());
static LINE_LEADING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n[ \t]*").unwrap());
static LINE_TRAILING_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[ \t]*\n").unwrap());
static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\n\n*").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\t\n\x0C\r ]+").unwrap());

/// Unify newlines: `\r\n` becomes `\n`, then any remaining `\r` becomes `\n`.
pub fn fix_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Replace characters a browser would not show as-is: non-breaking spaces
/// become regular spaces and zero-width non-joiners are removed.
pub fn render_text(text: &str) -> String {
    let mut text = text.to_string();
    for code in NBSP_CODES {
        if text.contains(code) {
            text = text.replace(code, " ");
        }
    }
    for code in ZWNJ_CODES {
        if text.contains(code) {
            text = text.replace(code, "");
        }
    }
    text
}

/// True when nothing but spaces, tabs and newlines would be rendered
pub fn is_whitespace(text: &str) -> bool {
    render_text(text).trim_matches(BLANK_CHARS).is_empty()
}

/// Collapse every run of HTML whitespace to a single space
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Remove spaces and tabs before every newline
pub fn strip_line_trailing_space(text: &str) -> String {
    LINE_TRAILING_SPACE.replace_all(text, "\n").into_owned()
}

/// Trim [`TRIM_CHARS`] from both ends
pub fn trim(text: &str) -> &str {
    text.trim_matches(TRIM_CHARS)
}

/// Normalize whitespace and newlines of rendered text.
///
/// Spaces and tabs at line edges are removed and blank lines are collapsed
/// to at most one between blocks. Armored preformatted newlines are only
/// restored after the line-edge passes, so indentation inside `<pre>` blocks
/// survives.
pub fn process_whitespace_newlines(text: &str) -> String {
    let text = SPACES_AROUND_TAB.replace_all(text, "\t");
    let text = text.trim_start_matches(TRIM_CHARS);
    let text = LINE_LEADING_SPACE.replace_all(text, "\n");

    // nbsp is converted after the leading-space pass, it is often used for
    // indentation
    let text = render_text(&text);

    let text = text.trim_end_matches(TRIM_CHARS);
    let text = LINE_TRAILING_SPACE.replace_all(text, "\n");

    let text = fix_newlines(&text);

    EXCESS_NEWLINES.replace_all(&text, "\n\n").into_owned()
}
