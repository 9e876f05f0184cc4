//! Parse and matcher errors.

use thiserror::Error;

/// Failure turning source text into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("unterminated string literal starting at offset {offset}")]
    UnterminatedString { offset: usize },

    #[error("unable to infer expression kind: {found} (offset {offset})")]
    UnknownKind { found: String, offset: usize },

    #[error("unexpected '{found}' at offset {offset}")]
    UnexpectedCloser { found: char, offset: usize },

    #[error("invalid dictionary format at offset {offset}")]
    InvalidDictionary { offset: usize },

    #[error("expression invalid: {open} unclosed form(s)")]
    Unclosed { open: usize },
}

/// Failure registering a token matcher.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatcherError {
    #[error("matcher for {0} already registered")]
    Duplicate(String),
}
