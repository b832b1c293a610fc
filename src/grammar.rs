//! Ordered rule table describing how Ymir source is classified.
//!
//! A [`Grammar`] is plain data: a list of [`Rule`]s, each pairing a
//! [`Category`] with one or more [`Pattern`]s. The lexer tries rules in
//! table order and, within a rule, patterns in listed order. The table
//! (de)serializes with serde so it can be swapped out from a config file.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::token::Category;

/// Reserved words.
pub const KEYWORDS: &[&str] = &[
    "break", "else", "enum", "extern", "fn", "for", "if", "in", "let", "match", "mod", "return",
    "sizeof", "static", "self", "struct", "super", "def", "dg", "typeof", "while", "with",
    "import", "assert", "macro", "move", "copy", "dcopy", "class", "throws", "over", "aka",
    "trait", "throw",
];

/// Modifiers, qualifiers and literal words.
pub const OTHER_KEYWORDS: &[&str] = &[
    "mut", "dmut", "false", "true", "pub", "prv", "prot", "ref", "with", "new", "alias", "is",
    "impl",
];

/// Primitive scalar type names.
pub const BASIC_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "bool", "c8", "c32",
];

static YMIR: LazyLock<Grammar> = LazyLock::new(Grammar::build_ymir);

/// A single recognizer. Every variant consumes at least one byte when it
/// matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Pattern {
    /// `/* ... */`, not preceded by `\`.
    BlockComment,
    /// `// ...` to end of line, not preceded by `\` or `:`.
    LineComment,
    /// `b?r#*"..."#*` with a balanced hash run.
    RawString,
    /// `b?"..."` or `b?'...'`.
    QuotedString,
    /// A whole identifier that is one of `words`.
    Words { words: Vec<String> },
    /// Identifier directly after `separator`.
    AfterSeparator { separator: String },
    /// Identifier directly followed by `separator` (not consumed).
    BeforeSeparator { separator: String },
    /// After whitespace, `:`, whitespace: one character other than `[`
    /// followed by an identifier.
    AfterColon,
    /// Identifier after whitespace and `&`.
    AfterAmpersand,
    /// `#:[...]` or `#!:[...]` on a single line.
    Attribute,
    /// Identifier followed by optional whitespace and `(`.
    Call,
    /// `name!` followed by optional whitespace and `(`, or by `[`.
    MacroCall,
    /// Signed hex, octal, binary or decimal literal with optional suffix.
    Number,
    /// Longest of a fixed set of symbols.
    Symbols { symbols: Vec<String> },
    /// One or more repetitions of `ch`.
    Run { ch: char },
}

/// A category and the patterns that recognize it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub category: Category,
    /// Additional display class, e.g. `attr-name` for attributes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub patterns: Vec<Pattern>,
}

impl Rule {
    #[must_use]
    pub const fn new(category: Category, patterns: Vec<Pattern>) -> Self {
        Self {
            category,
            alias: None,
            patterns,
        }
    }

    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// Ordered rule table. Earlier rules take priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grammar {
    pub rules: Vec<Rule>,
}

/// Reason a rule table was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("rule {rule} ({category}) has no patterns")]
    NoPatterns { rule: usize, category: Category },
    #[error("rule {rule} uses the plain category, which is reserved for unmatched text")]
    PlainCategory { rule: usize },
    #[error("rule {rule} ({category}): alias {alias:?} is not a class name")]
    InvalidAlias {
        rule: usize,
        category: Category,
        alias: String,
    },
    #[error("rule {rule} ({category}), pattern {pattern}: word list is empty")]
    EmptyWords {
        rule: usize,
        pattern: usize,
        category: Category,
    },
    #[error("rule {rule} ({category}), pattern {pattern}: empty word or symbol")]
    EmptyEntry {
        rule: usize,
        pattern: usize,
        category: Category,
    },
    #[error("rule {rule} ({category}), pattern {pattern}: separator is empty")]
    EmptySeparator {
        rule: usize,
        pattern: usize,
        category: Category,
    },
}

impl Grammar {
    /// The built-in Ymir table, shared for the lifetime of the process.
    #[must_use]
    pub fn ymir() -> &'static Self {
        &YMIR
    }

    fn build_ymir() -> Self {
        let words = |list: &[&str]| Pattern::Words {
            words: list.iter().map(ToString::to_string).collect(),
        };
        let symbols = |list: &[&str]| Pattern::Symbols {
            symbols: list.iter().map(ToString::to_string).collect(),
        };

        Self {
            rules: vec![
                Rule::new(
                    Category::Comment,
                    vec![Pattern::BlockComment, Pattern::LineComment],
                ),
                Rule::new(
                    Category::String,
                    vec![Pattern::RawString, Pattern::QuotedString],
                ),
                Rule::new(Category::Keyword, vec![words(KEYWORDS)]),
                Rule::new(Category::OtherKeyword, vec![words(OTHER_KEYWORDS)]),
                Rule::new(Category::BasicType, vec![words(BASIC_TYPES)]),
                Rule::new(
                    Category::Path,
                    vec![
                        Pattern::AfterSeparator {
                            separator: "::".to_string(),
                        },
                        Pattern::BeforeSeparator {
                            separator: "::".to_string(),
                        },
                    ],
                ),
                Rule::new(
                    Category::Type,
                    vec![Pattern::AfterColon, Pattern::AfterAmpersand],
                ),
                Rule::new(Category::Attribute, vec![Pattern::Attribute]).alias("attr-name"),
                Rule::new(Category::Function, vec![Pattern::Call, Pattern::MacroCall]),
                Rule::new(Category::Number, vec![Pattern::Number]),
                Rule::new(
                    Category::Punctuation,
                    vec![
                        symbols(&["{", "}", "[", "]", ";", "(", ")", ",", ":"]),
                        Pattern::Run { ch: '.' },
                        symbols(&["->"]),
                    ],
                ),
                Rule::new(
                    Category::Operator,
                    vec![symbols(&[
                        "-", "-=", "+", "+=", "*", "*=", "/", "/=", "%", "%=", "!", "!=", "^",
                        "^=", "=", "==", "@", "&", "&&", "&=", "|", "||", "|=", "<", "<<", "<=",
                        "<<=", ">", ">>", ">=", ">>=",
                    ])],
                ),
            ],
        }
    }

    /// Check that every rule can make progress when it matches and
    /// renders to a well-formed class list.
    ///
    /// # Errors
    ///
    /// Returns the first offending rule and pattern.
    pub fn validate(&self) -> Result<(), GrammarError> {
        for (rule_idx, rule) in self.rules.iter().enumerate() {
            let category = rule.category;
            if category == Category::Plain {
                return Err(GrammarError::PlainCategory { rule: rule_idx });
            }
            if let Some(alias) = rule.alias.as_deref().filter(|a| !is_class_name(a)) {
                return Err(GrammarError::InvalidAlias {
                    rule: rule_idx,
                    category,
                    alias: alias.to_string(),
                });
            }
            if rule.patterns.is_empty() {
                return Err(GrammarError::NoPatterns {
                    rule: rule_idx,
                    category,
                });
            }

            for (pattern, p) in rule.patterns.iter().enumerate() {
                match p {
                    Pattern::Words { words: list } | Pattern::Symbols { symbols: list } => {
                        if list.is_empty() {
                            return Err(GrammarError::EmptyWords {
                                rule: rule_idx,
                                pattern,
                                category,
                            });
                        }
                        if list.iter().any(String::is_empty) {
                            return Err(GrammarError::EmptyEntry {
                                rule: rule_idx,
                                pattern,
                                category,
                            });
                        }
                    }
                    Pattern::AfterSeparator { separator }
                    | Pattern::BeforeSeparator { separator } => {
                        if separator.is_empty() {
                            return Err(GrammarError::EmptySeparator {
                                rule: rule_idx,
                                pattern,
                                category,
                            });
                        }
                    }
                    _ => {}
                }
            }
        }
        Ok(())
    }
}

/// Non-empty run of ASCII alphanumerics, `-` and `_`.
fn is_class_name(alias: &str) -> bool {
    !alias.is_empty()
        && alias
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

impl Default for Grammar {
    fn default() -> Self {
        Self::ymir().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ymir_table_is_valid() {
        assert_eq!(Grammar::ymir().validate(), Ok(()));
    }

    #[test]
    fn ymir_rule_order() {
        let order: Vec<_> = Grammar::ymir().rules.iter().map(|r| r.category).collect();
        assert_eq!(
            order,
            vec![
                Category::Comment,
                Category::String,
                Category::Keyword,
                Category::OtherKeyword,
                Category::BasicType,
                Category::Path,
                Category::Type,
                Category::Attribute,
                Category::Function,
                Category::Number,
                Category::Punctuation,
                Category::Operator,
            ]
        );
    }

    #[test]
    fn attribute_carries_alias() {
        let rule = Grammar::ymir()
            .rules
            .iter()
            .find(|r| r.category == Category::Attribute)
            .expect("attribute rule");
        assert_eq!(rule.alias.as_deref(), Some("attr-name"));
    }

    #[test]
    fn rejects_rule_without_patterns() {
        let grammar = Grammar {
            rules: vec![Rule::new(Category::Keyword, vec![])],
        };
        assert_eq!(
            grammar.validate(),
            Err(GrammarError::NoPatterns {
                rule: 0,
                category: Category::Keyword
            })
        );
    }

    #[test]
    fn rejects_empty_symbol() {
        let grammar = Grammar {
            rules: vec![Rule::new(
                Category::Operator,
                vec![Pattern::Symbols {
                    symbols: vec!["+".to_string(), String::new()],
                }],
            )],
        };
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::EmptyEntry { rule: 0, pattern: 0, .. })
        ));
    }

    #[test]
    fn rejects_empty_separator() {
        let grammar = Grammar {
            rules: vec![Rule::new(
                Category::Path,
                vec![Pattern::BeforeSeparator {
                    separator: String::new(),
                }],
            )],
        };
        assert!(matches!(
            grammar.validate(),
            Err(GrammarError::EmptySeparator { .. })
        ));
    }

    #[test]
    fn rejects_plain_rule() {
        let grammar = Grammar {
            rules: vec![
                Rule::new(Category::Keyword, vec![Pattern::Number]),
                Rule::new(Category::Plain, vec![Pattern::Run { ch: ' ' }]),
            ],
        };
        assert_eq!(
            grammar.validate(),
            Err(GrammarError::PlainCategory { rule: 1 })
        );
    }

    #[test]
    fn alias_must_be_a_class_name() {
        let with_alias = |alias: &str| Grammar {
            rules: vec![Rule::new(Category::Attribute, vec![Pattern::Attribute]).alias(alias)],
        };
        assert_eq!(with_alias("attr-name").validate(), Ok(()));
        assert_eq!(with_alias("attr_name2").validate(), Ok(()));
        for bad in ["", "a b", "x\" onclick=\"y", "<b>"] {
            assert!(
                matches!(
                    with_alias(bad).validate(),
                    Err(GrammarError::InvalidAlias { rule: 0, ref alias, .. }) if alias == bad
                ),
                "accepted alias {bad:?}"
            );
        }
    }
}
