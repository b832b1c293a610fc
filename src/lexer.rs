use tracing::{debug, trace};

use crate::grammar::{Grammar, Rule};
use crate::scan;
use crate::token::{Category, Span, Token};

/// Tokenize Ymir source text with the built-in grammar.
///
/// The returned tokens cover the input without gaps or overlaps;
/// text no rule matches comes back as [`Category::Plain`].
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Grammar::ymir().tokenize(input)
}

impl Grammar {
    /// Tokenize `input` with this rule table.
    ///
    /// At each position the rules are tried in table order and the first
    /// pattern that matches claims the text. Unmatched characters are
    /// collected into plain-text tokens.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        let tokens = Lexer::new(self, input).tokenize();
        debug!(
            bytes = input.len(),
            tokens = tokens.len(),
            "tokenized source"
        );
        tokens
    }
}

struct Lexer<'g, 'a> {
    grammar: &'g Grammar,
    input: &'a str,
    pos: usize,
    plain_start: Option<usize>,
    /// End of the identifier run in which every rule already failed.
    word_end: usize,
    tokens: Vec<Token>,
}

impl<'g, 'a> Lexer<'g, 'a> {
    const fn new(grammar: &'g Grammar, input: &'a str) -> Self {
        Self {
            grammar,
            input,
            pos: 0,
            plain_start: None,
            word_end: 0,
            tokens: Vec::new(),
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        while self.pos < self.input.len() {
            let inside_word = self.pos < self.word_end;
            if let Some((rule, end)) = self.match_rule(inside_word) {
                self.flush_plain();
                trace!(
                    category = %rule.category,
                    start = self.pos,
                    end,
                    "rule matched"
                );
                self.push(rule.category, rule.alias.clone(), end);
            } else {
                if !inside_word {
                    self.word_end = scan::ident(self.input.as_bytes(), self.pos).unwrap_or(0);
                }
                self.plain_start.get_or_insert(self.pos);
                self.advance();
            }
        }
        self.flush_plain();

        debug_assert_eq!(
            self.tokens.iter().map(|t| t.text.as_str()).collect::<String>(),
            self.input,
            "tokens must reproduce the input"
        );
        self.tokens
    }

    /// First rule (and the end of its match) claiming the text at `pos`.
    ///
    /// Inside a run where everything failed, only patterns that can still
    /// start mid-word are tried.
    fn match_rule(&self, inside_word: bool) -> Option<(&'g Rule, usize)> {
        self.grammar.rules.iter().find_map(|rule| {
            rule.patterns
                .iter()
                .filter(|p| !inside_word || p.matches_inside_word())
                .find_map(|p| p.match_at(self.input, self.pos))
                .filter(|&end| end > self.pos)
                .map(|end| (rule, end))
        })
    }

    fn advance(&mut self) {
        let width = self.input[self.pos..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos += width;
    }

    fn push(&mut self, category: Category, alias: Option<String>, end: usize) {
        let span = Span::new(self.pos, end);
        self.tokens.push(Token {
            category,
            text: self.input[span.range()].to_string(),
            alias,
            span,
        });
        self.pos = end;
    }

    fn flush_plain(&mut self) {
        if let Some(start) = self.plain_start.take() {
            let span = Span::new(start, self.pos);
            self.tokens.push(Token {
                category: Category::Plain,
                text: self.input[span.range()].to_string(),
                alias: None,
                span,
            });
        }
    }
}
