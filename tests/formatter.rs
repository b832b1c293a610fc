//! HTML rendering of grammar tokens.

use ymir_highlight::{Config, render_html, tokenize};

#[test]
fn html_empty() {
    assert_eq!(render_html(&tokenize("")), "");
}

#[test]
fn html_keyword_and_function() {
    let html = render_html(&tokenize("def main () {}"));
    assert_eq!(
        html,
        "<span class=\"token keyword\">def</span> \
         <span class=\"token function\">main</span> \
         <span class=\"token punctuation\">(</span>\
         <span class=\"token punctuation\">)</span> \
         <span class=\"token punctuation\">{</span>\
         <span class=\"token punctuation\">}</span>"
    );
}

#[test]
fn html_escapes_inside_tokens() {
    let html = render_html(&tokenize("\"<b>&\""));
    assert_eq!(html, "<span class=\"token string\">\"&lt;b>&amp;\"</span>");
}

#[test]
fn html_normalises_nbsp() {
    let html = render_html(&tokenize("a\u{a0}b"));
    assert_eq!(html, "a b");
}

#[test]
fn html_category_names() {
    let html = render_html(&tokenize("let mut b : bool = true;"));
    assert!(html.contains("<span class=\"token other-keyword\">mut</span>"));
    assert!(html.contains("<span class=\"token basic-types\">bool</span>"));
    assert!(html.contains("<span class=\"token other-keyword\">true</span>"));
}

#[test]
fn html_with_custom_grammar() {
    let config = Config::from_toml_str(
        "[[grammar.rules]]\n\
         category = \"keyword\"\n\
         patterns = [{ kind = \"words\", words = [\"proc\"] }]\n",
    )
    .expect("config");
    let html = render_html(&config.tokenize("proc def"));
    assert_eq!(html, "<span class=\"token keyword\">proc</span> def");
}
