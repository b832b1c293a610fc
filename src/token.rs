use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Byte range of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Token categories produced by the grammar tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Block (`/* ... */`) or line (`// ...`) comment.
    Comment,
    /// Raw, byte or quoted string literal.
    String,
    /// Reserved word.
    Keyword,
    /// Modifier, qualifier or literal word (`mut`, `pub`, `true`, ...).
    OtherKeyword,
    /// Primitive scalar type name.
    #[serde(rename = "basic-types")]
    BasicType,
    /// Segment of a `a::b` path.
    Path,
    /// Type annotation after ` : ` or ` &`.
    Type,
    /// `#:[...]` or `#!:[...]` attribute.
    Attribute,
    /// Function or macro call name.
    Function,
    /// Numeric literal.
    Number,
    /// Structural symbol.
    Punctuation,
    /// Arithmetic, comparison, logical or assignment symbol.
    Operator,
    /// Text no rule matched.
    Plain,
}

impl Category {
    /// Name used in rule tables and in rendered class attributes.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Keyword => "keyword",
            Self::OtherKeyword => "other-keyword",
            Self::BasicType => "basic-types",
            Self::Path => "path",
            Self::Type => "type",
            Self::Attribute => "attribute",
            Self::Function => "function",
            Self::Number => "number",
            Self::Punctuation => "punctuation",
            Self::Operator => "operator",
            Self::Plain => "plain",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A single token with its category, text, display alias and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub category: Category,
    pub text: String,
    /// Extra display class carried over from the matching rule.
    pub alias: Option<String>,
    pub span: Span,
}

impl Token {
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        matches!(self.category, Category::Plain)
    }
}
