//! Bootstrap and pipeline errors.

use lingo_ir::SymbolError;
use lingo_macro::MacroError;
use lingo_parse::{MatcherError, ParseError};
use lingo_types::TypeError;
use lingo_value::EvalError;
use thiserror::Error;

/// Configuration failure while registering functions, types, matchers or
/// macros. Fatal to the interpreter being built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("function {0} already used")]
    DuplicateFunction(String),
    #[error(transparent)]
    Symbol(#[from] SymbolError),
    #[error(transparent)]
    Type(#[from] TypeError),
    #[error(transparent)]
    Matcher(#[from] MatcherError),
    #[error(transparent)]
    Macro(#[from] MacroError),
}

/// Failure of the whole source-to-value pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LingoError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalError),
}
