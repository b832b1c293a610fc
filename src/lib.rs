//! Syntax highlighting for the Ymir programming language.
//!
//! Two independent ways to turn Ymir source into classified text:
//!
//! - a rule-table tokenizer ([`tokenize`], [`Grammar`]) producing
//!   categorized tokens that [`render_html`] turns into markup, and
//! - a space/newline splitter ([`split`]) with a vocabulary classifier
//!   ([`highlight`], [`Vocabulary`]) that wraps keywords and primitive
//!   types in an already-rendered code block.
//!
//! # Quick start
//!
//! ## Tokenize and render
//!
//! ```
//! use ymir_highlight::{Category, render_html, tokenize};
//!
//! let tokens = tokenize("def main () {}");
//! assert_eq!(tokens[0].category, Category::Keyword);
//! assert_eq!(tokens[2].category, Category::Function);
//!
//! let html = render_html(&tokens);
//! assert!(html.starts_with("<span class=\"token keyword\">def</span>"));
//! ```
//!
//! ## Highlight a code block
//!
//! ```
//! use ymir_highlight::highlight;
//!
//! let out = highlight("let x : i32");
//! assert_eq!(
//!     out,
//!     "<span class=\"hljs-keyword\">let</span> x : <span class=\"hljs-type\">i32</span>"
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

use std::fs;
use std::path::Path;

pub mod config;
pub mod formatter;
pub mod grammar;
pub mod lexer;
mod number;
mod scan;
pub mod splitter;
pub mod token;
pub mod vocabulary;

pub use config::{Config, ConfigError};
pub use formatter::render_html;
pub use grammar::{Grammar, GrammarError, Pattern, Rule};
pub use lexer::tokenize;
pub use splitter::split;
pub use token::{Category, Span, Token};
pub use vocabulary::{Class, Vocabulary, VocabularyError, highlight};

/// Unified error type for the fallible surfaces of the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration error.
    #[error("{0}")]
    Config(#[from] ConfigError),
    /// Reading source text failed.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

/// Load an optional configuration file, falling back to the Ymir
/// defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<Config, Error> {
    Ok(path.map(Config::load).transpose()?.unwrap_or_default())
}

/// Read a source file to highlight.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let source = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "read source");
    Ok(source)
}
