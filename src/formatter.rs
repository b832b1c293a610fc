//! HTML rendering of grammar tokens.
//!
//! Every classified token becomes
//! `<span class="token CATEGORY ALIAS">TEXT</span>`; plain text is
//! escaped but left unwrapped.

use crate::token::Token;

/// Render tokens as highlighted HTML.
#[must_use]
pub fn render_html(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        if token.is_plain() {
            push_escaped(&mut out, &token.text);
            continue;
        }

        out.push_str("<span class=\"token ");
        out.push_str(token.category.name());
        if let Some(alias) = &token.alias {
            out.push(' ');
            push_attribute(&mut out, alias);
        }
        out.push_str("\">");
        push_escaped(&mut out, &token.text);
        out.push_str("</span>");
    }
    out
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '\u{a0}' => out.push(' '),
            _ => out.push(ch),
        }
    }
}

/// Escape text placed inside a double-quoted attribute value.
fn push_attribute(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use crate::token::{Category, Span};

    #[test]
    fn wraps_categories() {
        let html = render_html(&tokenize("let x"));
        assert_eq!(html, "<span class=\"token keyword\">let</span> x");
    }

    #[test]
    fn escapes_markup() {
        let html = render_html(&tokenize("a < b"));
        assert_eq!(html, "a <span class=\"token operator\">&lt;</span> b");
    }

    #[test]
    fn escapes_plain_text() {
        assert_eq!(
            render_html(&tokenize("é&é")),
            "é<span class=\"token operator\">&amp;</span>é"
        );
    }

    #[test]
    fn alias_joins_class_list() {
        let html = render_html(&tokenize("#:[inline]"));
        assert_eq!(
            html,
            "<span class=\"token attribute attr-name\">#:[inline]</span>"
        );
    }

    #[test]
    fn alias_cannot_close_class_attribute() {
        let token = Token {
            category: Category::Attribute,
            text: "#:[a]".to_string(),
            alias: Some("x\" onclick=\"y".to_string()),
            span: Span::new(0, 5),
        };
        assert_eq!(
            render_html(&[token]),
            "<span class=\"token attribute x&quot; onclick=&quot;y\">#:[a]</span>"
        );
    }
}
