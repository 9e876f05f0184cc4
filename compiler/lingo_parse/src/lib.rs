//! Lingo Parse - source text to expression trees
//!
//! Three layers:
//! - [`Lexer`]: logos-generated tokens with byte offsets
//! - [`MatcherChain`]: classifies bare words as node kinds; host-extensible
//! - [`Parser`]: builds the `root` tree from tokens
//!
//! Which words name functions depends on what the interpreter registered, so
//! the parser borrows the [`SymbolTable`](lingo_ir::SymbolTable) rather than
//! carrying a fixed keyword list.

mod error;
mod lexer;
mod matcher;
mod parser;

pub use error::{MatcherError, ParseError};
pub use lexer::{Lexer, Token, TokenKind};
pub use matcher::{
    HookedMatcher, IdentifierMatcher, KeywordMatcher, MatcherChain, NumberMatcher, TokenMatcher,
};
pub use parser::Parser;
