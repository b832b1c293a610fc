//! TOML configuration for the highlighter.
//!
//! ```toml
//! [vocabulary]
//! keywords = ["def", "let"]
//! types = ["i32"]
//!
//! [[grammar.rules]]
//! category = "comment"
//! patterns = [{ kind = "block-comment" }, { kind = "line-comment" }]
//! ```
//!
//! Sections left out fall back to the built-in Ymir tables.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::grammar::{Grammar, GrammarError};
use crate::token::Token;
use crate::vocabulary::{Vocabulary, VocabularyError};

/// Error produced while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid grammar: {0}")]
    Grammar(#[from] GrammarError),
    #[error("invalid vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
}

/// Vocabulary and grammar table used for highlighting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub vocabulary: Vocabulary,
    pub grammar: Grammar,
}

impl Config {
    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Toml` on malformed TOML or unknown pattern
    /// kinds, `ConfigError::Grammar` when the rule table is invalid and
    /// `ConfigError::Vocabulary` when a word list holds an empty word.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(input)?;
        config.grammar.validate()?;
        config.vocabulary.validate()?;
        debug!(
            rules = config.grammar.rules.len(),
            keywords = config.vocabulary.keywords.len(),
            types = config.vocabulary.types.len(),
            "loaded configuration"
        );
        Ok(config)
    }

    /// Read and parse a configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise
    /// the errors of [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Tokenize `input` with this configuration's grammar.
    #[must_use]
    pub fn tokenize(&self, input: &str) -> Vec<Token> {
        self.grammar.tokenize(input)
    }

    /// Highlight a code block with this configuration's vocabulary.
    #[must_use]
    pub fn highlight(&self, text: &str) -> String {
        self.vocabulary.highlight(text)
    }

    /// Serialize back to TOML.
    ///
    /// # Errors
    ///
    /// Fails only if the table cannot be represented in TOML.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Category;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").expect("parse");
        assert_eq!(&config.grammar, Grammar::ymir());
        assert_eq!(&config.vocabulary, Vocabulary::ymir());
    }

    #[test]
    fn vocabulary_override() {
        let config = Config::from_toml_str(
            "[vocabulary]\nkeywords = [\"proc\"]\ntypes = [\"int\"]\n",
        )
        .expect("parse");
        assert!(config.vocabulary.keywords.contains("proc"));
        assert!(!config.vocabulary.keywords.contains("fn"));
        assert_eq!(&config.grammar, Grammar::ymir());
    }

    #[test]
    fn grammar_override() {
        let input = r#"
[[grammar.rules]]
category = "keyword"
patterns = [{ kind = "words", words = ["proc"] }]

[[grammar.rules]]
category = "attribute"
alias = "attr-name"
patterns = [{ kind = "attribute" }]
"#;
        let config = Config::from_toml_str(input).expect("parse");
        assert_eq!(config.grammar.rules.len(), 2);
        assert_eq!(config.grammar.rules[1].category, Category::Attribute);
        assert_eq!(config.grammar.rules[1].alias.as_deref(), Some("attr-name"));
    }

    #[test]
    fn unknown_pattern_kind() {
        let input = "[[grammar.rules]]\ncategory = \"keyword\"\npatterns = [{ kind = \"regex\" }]\n";
        assert!(matches!(
            Config::from_toml_str(input),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn invalid_table_rejected() {
        let input = "[[grammar.rules]]\ncategory = \"keyword\"\npatterns = []\n";
        assert!(matches!(
            Config::from_toml_str(input),
            Err(ConfigError::Grammar(GrammarError::NoPatterns { rule: 0, .. }))
        ));
    }

    #[test]
    fn plain_rule_rejected() {
        let input = "[[grammar.rules]]\ncategory = \"plain\"\npatterns = [{ kind = \"number\" }]\n";
        assert!(matches!(
            Config::from_toml_str(input),
            Err(ConfigError::Grammar(GrammarError::PlainCategory { rule: 0 }))
        ));
    }

    #[test]
    fn quoted_alias_rejected() {
        let input = r#"
[[grammar.rules]]
category = "attribute"
alias = 'x" onmouseover="y'
patterns = [{ kind = "attribute" }]
"#;
        assert!(matches!(
            Config::from_toml_str(input),
            Err(ConfigError::Grammar(GrammarError::InvalidAlias { rule: 0, .. }))
        ));
    }

    #[test]
    fn empty_keyword_rejected() {
        let input = "[vocabulary]\nkeywords = [\"let\", \"\"]\n";
        assert!(matches!(
            Config::from_toml_str(input),
            Err(ConfigError::Vocabulary(VocabularyError::EmptyWord { list: "keywords" }))
        ));
    }

    #[test]
    fn defaults_round_trip_through_toml() {
        let text = Config::default().to_toml_string().expect("serialize");
        let parsed = Config::from_toml_str(&text).expect("parse");
        assert_eq!(parsed, Config::default());
    }
}
