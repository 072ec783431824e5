use htmltext::{convert, convert_bytes, CharacterSet, Config, HtmlTextError};
use htmltext_core::render::HORIZONTAL_RULE;

fn text(html: &str) -> String {
    convert(html, &Config::default()).unwrap()
}

fn text_without_links(html: &str) -> String {
    convert(html, &Config::without_links()).unwrap()
}

#[test]
fn paragraphs() {
    assert_eq!(text("<p>Hello</p><p>World</p>"), "Hello\n\nWorld");
}

#[test]
fn empty_input() {
    assert_eq!(text(""), "");
    assert_eq!(text("   \n  "), "");
}

#[test]
fn bare_text() {
    assert_eq!(text("Hello   there\nfriend"), "Hello there friend");
}

#[test]
fn ampersands() {
    assert_eq!(text("<p>Tom & Jerry &amp; friends</p>"), "Tom & Jerry & friends");
    assert_eq!(
        text(r#"<a href="https://x.test/?a=1&b=2">query</a>"#),
        "[query](https://x.test/?a=1&b=2)"
    );
}

#[test]
fn headings() {
    assert_eq!(
        text("<h1>Title</h1>intro<h2>Section</h2><p>body</p>"),
        "Title\n\nintro\n\nSection\n\nbody"
    );
}

#[test]
fn self_referential_links() {
    assert_eq!(text(r#"<a href="https://x.test">https://x.test</a>"#), "https://x.test");
    assert_eq!(text(r#"<a href="https://x.test">x.test</a>"#), "x.test");
    assert_eq!(text(r#"<a href="mailto:me@x.test">me@x.test</a>"#), "me@x.test");
    assert_eq!(
        text(r#"<a href="mailto:you@x.test">me@x.test</a>"#),
        "[me@x.test](mailto:you@x.test)"
    );
}

#[test]
fn links() {
    let html = r#"<a href="https://x.test">Click</a>"#;
    assert_eq!(text(html), "[Click](https://x.test)");
    assert_eq!(text_without_links(html), "Click");
}

#[test]
fn anchors() {
    let html = r#"<p><a name="top">Top</a> of <a href="/page" title="Page">  </a></p>"#;
    assert_eq!(text(html), "[Top] of [Page](/page)");
    assert_eq!(text_without_links(html), "Top of Page");

    assert_eq!(text(r#"<a href="/x"></a>"#), "/x");
    assert_eq!(text("<a>plain</a>"), "plain");
}

#[test]
fn linked_images() {
    assert_eq!(
        text(r#"<a href="https://x.test"><img src="logo.png" alt="Logo"></a>"#),
        "[Logo](https://x.test)"
    );
    assert_eq!(
        text(r#"<a href="https://x.test" title="Home"><img src="logo.png" alt="Logo"></a>"#),
        "[Home](https://x.test)"
    );
}

#[test]
fn link_before_heading() {
    assert_eq!(
        text(r#"<a href="https://x.test">x</a><h1>Title</h1>"#),
        "[x](https://x.test)\n\nTitle"
    );
}

#[test]
fn images() {
    assert_eq!(text(r#"<img src="a.png" alt="Logo">"#), "[Logo]");
    assert_eq!(text(r#"<img src="a.png" alt="Logo" title="Company">"#), "[Company]");
    assert_eq!(text(r#"before<img src="a.png">after"#), "beforeafter");
}

#[test]
fn lists() {
    assert_eq!(text("<ul><li>One</li><li>Two</li></ul>"), "- One\n- Two");
    assert_eq!(
        text("<ul>\n  <li>One</li>\n  <li>Two</li>\n</ul>"),
        "- One\n- Two"
    );
    assert_eq!(
        text("<p>Steps:</p><ol><li>First</li><li>Second</li></ol><p>Done</p>"),
        "Steps:\n\n- First\n- Second\n\nDone"
    );
}

#[test]
fn tables() {
    let html = "<table>\n<tr><th>Name</th><th>Age</th></tr>\n\
                <tr><td> Ann </td><td>7</td></tr>\n</table>";
    assert_eq!(text(html), "Name\tAge\nAnn\t7");
}

#[test]
fn preformatted() {
    assert_eq!(text("<pre>  a\n   b</pre>"), "a\n   b");
    assert_eq!(
        text("<p>x    y</p><pre>\nfn main() {\n    println!();\n}\n</pre>"),
        "x y\n\nfn main() {\n    println!();\n}"
    );
}

#[test]
fn breaks() {
    assert_eq!(text("<p>line one<br>line two<br></p>"), "line one\nline two");
    assert_eq!(text("a<br><br>b"), "a\n\nb");
}

#[test]
fn nested_divs() {
    assert_eq!(text("<div>a<div>b</div>c</div>"), "a\nb\nc");
    assert_eq!(
        text("<div><div>one</div></div><div><div>two</div></div>"),
        "one\ntwo"
    );
}

#[test]
fn horizontal_rules() {
    let rule = HORIZONTAL_RULE.trim_end();
    assert_eq!(text("<hr>"), rule);
    assert_eq!(
        text("<p>a</p><hr><p>b</p>"),
        format!("a\n\n{}\n\nb", rule)
    );
}

#[test]
fn blockquotes() {
    assert_eq!(
        text("<p>Hi,</p><blockquote><p>quoted</p><p>text</p></blockquote><p>Bye</p>"),
        "Hi,\n\n> quoted\n>\n> text\n\nBye"
    );
}

#[test]
fn nested_blockquotes() {
    let out = text("<blockquote>outer<blockquote>inner</blockquote></blockquote>");
    assert_eq!(out, "> outer\n>\n>> inner");
    assert!(!out.contains("> >"));
}

#[test]
fn ignored_elements() {
    let html = "<html><head><title>T</title><meta charset=utf-8>\
                <style>p { color: red }</style></head>\
                <body><script>alert(1)</script><p>x</p></body></html>";
    assert_eq!(text(html), "x");
}

#[test]
fn hidden_plaintext() {
    assert_eq!(
        text("<div data-hidden-plaintext>plain alternative</div><p>shown</p>"),
        "shown"
    );
}

#[test]
fn doctype_and_comments() {
    assert_eq!(text("<!DOCTYPE html><p>x</p>"), "x");
    assert_eq!(text("<p>a</p><!-- note --><p>b</p>"), "a\n\nb");
}

#[test]
fn non_breaking_spaces() {
    assert_eq!(text("<p>a&nbsp;&nbsp;b</p>"), "a b");
    assert_eq!(text("<p>a\u{a0}b</p>"), "a b");
}

#[test]
fn zero_width_non_joiners() {
    assert_eq!(text("<p>a&zwnj;b\u{200c}c</p>"), "abc");
}

#[test]
fn utf8() {
    assert_eq!(text("<p>Привет, 世界</p>"), "Привет, 世界");
}

#[test]
fn office_documents() {
    let html = "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\"><body>\
                <p class=\"MsoNormal\">one<o:p></o:p></p>\
                <p class=\"MsoNormal\">two<o:p></o:p></p></body></html>";
    assert_eq!(text(html), "one\ntwo");

    // same markup without the office namespace keeps paragraphs
    let html = "<p class=\"MsoNormal\">one</p><p class=\"MsoNormal\">two</p>";
    assert_eq!(text(html), "one\n\ntwo");
}

#[test]
fn deeply_nested_markup() {
    let depth = 5000;
    let html = format!("{}x{}", "<div>".repeat(depth), "</div>".repeat(depth));
    assert_eq!(text(&html), "x");

    let html = format!(
        "<p>before</p>{}<p>deep</p>{}<p>after</p>",
        "<blockquote>".repeat(depth),
        "</blockquote>".repeat(depth)
    );
    let out = text(&html);
    assert!(out.starts_with("before\n\n>"), "{:?}", out);
    assert!(out.ends_with("deep\n\nafter"), "{:?}", out);
}

#[test]
fn windows_line_endings() {
    let out = text("<p>a\r\nb</p>\r\n<p>c</p>");
    assert_eq!(out, "a b\n\nc");
    assert!(!out.contains('\r'));
}

#[test]
fn bytes_auto_detected() {
    let out = convert_bytes(b"<p>\x93quoted\x94</p>", &Config::default()).unwrap();
    assert_eq!(out, "\u{201c}quoted\u{201d}");

    let out = convert_bytes("<p>héllo</p>".as_bytes(), &Config::default()).unwrap();
    assert_eq!(out, "héllo");
}

#[test]
fn bytes_unknown_charset() {
    let config = Config {
        character_set: CharacterSet::Named("klingon".to_string()),
        ..Default::default()
    };
    let err = convert_bytes(b"<p>x</p>", &config).unwrap_err();
    let HtmlTextError::Load { markup, .. } = &err;
    assert_eq!(markup, "<p>x</p>");
}

#[test]
fn full_email() {
    let html = r#"<!DOCTYPE html>
<html>
<head>
  <title>Newsletter</title>
  <style>body { font-family: sans-serif }</style>
</head>
<body>
  <h1>Weekly update</h1>
  <p>Hello <b>team</b>,</p>
  <p>Highlights:</p>
  <ul>
    <li>Shipped <a href="https://x.test/release">the release</a></li>
    <li>Fixed bugs</li>
  </ul>
  <p>Contact <a href="mailto:ops@x.test">ops@x.test</a>.</p>
</body>
</html>"#;

    let expected = "Weekly update\n\n\
                    Hello team,\n\n\
                    Highlights:\n\n\
                    - Shipped [the release](https://x.test/release)\n\
                    - Fixed bugs\n\n\
                    Contact ops@x.test.";
    assert_eq!(text(html), expected);

    let expected = "Weekly update\n\n\
                    Hello team,\n\n\
                    Highlights:\n\n\
                    - Shipped the release\n\
                    - Fixed bugs\n\n\
                    Contact ops@x.test.";
    assert_eq!(text_without_links(html), expected);
}
