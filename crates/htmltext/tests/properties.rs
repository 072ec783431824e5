//! Property-based tests over generated markup

use htmltext::{convert, Config};
use htmltext_core::process_whitespace_newlines;
use proptest::prelude::*;

const FLOW_TAGS: &[&str] = &[
    "p", "div", "span", "b", "h1", "h3", "ul", "ol", "li", "blockquote", "a", "table", "tr",
    "td", "br", "hr",
];

const ALL_TAGS: &[&str] = &[
    "p", "div", "span", "b", "h1", "h3", "ul", "ol", "li", "blockquote", "a", "table", "tr",
    "td", "br", "hr", "pre",
];

/// Random markup built from `tags`, with text drawn from letters and spaces
fn markup(tags: &'static [&'static str]) -> impl Strategy<Value = String> {
    "[a-z ]{0,8}".prop_recursive(4, 32, 4, move |inner| {
        (
            prop::sample::select(tags),
            prop::collection::vec(inner, 0..4),
        )
            .prop_map(|(tag, children)| {
                let content = children.concat();
                match tag {
                    "a" => format!(r#"<a href="https://x.test/page">{content}</a>"#),
                    "br" | "hr" => format!("{content}<{tag}>"),
                    _ => format!("<{tag}>{content}</{tag}>"),
                }
            })
    })
}

proptest! {
    #[test]
    fn output_is_normalised(html in markup(ALL_TAGS)) {
        let text = convert(&html, &Config::default()).unwrap();
        prop_assert!(!text.contains('\r'), "{:?}", text);
        prop_assert!(!text.contains("\n\n\n"), "{:?}", text);
        prop_assert!(!text.starts_with(char::is_whitespace));
        prop_assert!(!text.ends_with(char::is_whitespace));
    }

    #[test]
    fn dropped_links_leave_no_targets(html in markup(FLOW_TAGS)) {
        let text = convert(&html, &Config::without_links()).unwrap();
        prop_assert!(!text.contains("]("), "{:?}", text);
    }

    #[test]
    fn output_survives_postprocessing(html in markup(FLOW_TAGS)) {
        let text = convert(&html, &Config::default()).unwrap();
        prop_assert_eq!(process_whitespace_newlines(&text), text);
    }
}
