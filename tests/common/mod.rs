#![allow(dead_code)]

use ymir_highlight::{Category, Token};

/// Assert that `tokens` tile `input` exactly: contiguous, non-empty
/// spans whose texts concatenate back to the input.
pub fn assert_covers(input: &str, tokens: &[Token]) {
    let mut pos = 0;
    for token in tokens {
        assert_eq!(
            token.span.start, pos,
            "gap or overlap before {token:?}\n--- input ---\n{input}"
        );
        assert!(!token.span.is_empty(), "empty token {token:?}");
        assert_eq!(&input[token.span.range()], token.text);
        pos = token.span.end;
    }
    assert_eq!(pos, input.len(), "input not fully covered:\n{input}");
}

/// `(category, text)` pairs for compact assertions.
pub fn classes(tokens: &[Token]) -> Vec<(Category, &str)> {
    tokens
        .iter()
        .map(|t| (t.category, t.text.as_str()))
        .collect()
}

/// Whether some token has exactly this category and text.
pub fn has(tokens: &[Token], category: Category, text: &str) -> bool {
    tokens
        .iter()
        .any(|t| t.category == category && t.text == text)
}

/// Category of the first token with this text.
pub fn category_of(tokens: &[Token], text: &str) -> Category {
    tokens
        .iter()
        .find(|t| t.text == text)
        .unwrap_or_else(|| panic!("no token {text:?} in {tokens:#?}"))
        .category
}

/// Remove the classifier's highlight spans.
pub fn strip_markup(html: &str) -> String {
    html.replace("<span class=\"hljs-keyword\">", "")
        .replace("<span class=\"hljs-type\">", "")
        .replace("</span>", "")
}
