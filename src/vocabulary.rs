//! Keyword and primitive-type vocabularies used by the code-block
//! classifier.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grammar::{BASIC_TYPES, KEYWORDS, OTHER_KEYWORDS};
use crate::splitter::split;

const KEYWORD_OPEN: &str = "<span class=\"hljs-keyword\">";
const TYPE_OPEN: &str = "<span class=\"hljs-type\">";
const CLOSE: &str = "</span>";

static YMIR: LazyLock<Vocabulary> = LazyLock::new(|| Vocabulary {
    keywords: KEYWORDS
        .iter()
        .chain(OTHER_KEYWORDS)
        .map(ToString::to_string)
        .collect(),
    types: BASIC_TYPES.iter().map(ToString::to_string).collect(),
});

/// How a splitter token is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Class {
    Keyword,
    Type,
    /// Emitted unchanged.
    Plain,
}

/// Reason a vocabulary was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VocabularyError {
    /// An empty word matches the empty token between adjacent separators.
    #[error("{list} contains an empty word")]
    EmptyWord { list: &'static str },
}

/// Fixed word sets matched exactly against splitter tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vocabulary {
    pub keywords: BTreeSet<String>,
    pub types: BTreeSet<String>,
}

impl Vocabulary {
    /// Ymir keywords (reserved words and modifiers) and primitive types.
    #[must_use]
    pub fn ymir() -> &'static Self {
        &YMIR
    }

    /// Classify a token by exact, case-sensitive membership.
    /// Keywords take precedence over types.
    #[must_use]
    pub fn classify(&self, token: &str) -> Class {
        if self.keywords.contains(token) {
            Class::Keyword
        } else if self.types.contains(token) {
            Class::Type
        } else {
            Class::Plain
        }
    }

    /// Check that every word can match a non-empty token.
    ///
    /// # Errors
    ///
    /// Returns the first list holding an empty word.
    pub fn validate(&self) -> Result<(), VocabularyError> {
        for (list, words) in [("keywords", &self.keywords), ("types", &self.types)] {
            if words.contains("") {
                return Err(VocabularyError::EmptyWord { list });
            }
        }
        Ok(())
    }

    /// Split `text`, wrap keywords and types in highlight spans, and join
    /// everything back together in order.
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        let tokens = split(text);
        let mut out = String::with_capacity(text.len());
        let mut wrapped = 0usize;

        for token in &tokens {
            let open = match self.classify(token) {
                Class::Keyword => KEYWORD_OPEN,
                Class::Type => TYPE_OPEN,
                Class::Plain => {
                    out.push_str(token);
                    continue;
                }
            };
            out.push_str(open);
            out.push_str(token);
            out.push_str(CLOSE);
            wrapped += 1;
        }

        debug!(tokens = tokens.len(), wrapped, "highlighted code block");
        out
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::ymir().clone()
    }
}

/// Highlight a code block with the built-in Ymir vocabulary.
#[must_use]
pub fn highlight(text: &str) -> String {
    Vocabulary::ymir().highlight(text)
}
