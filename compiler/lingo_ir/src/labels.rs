//! Structural labels of the language.
//!
//! The lexer, parser, macro passes and evaluator agree on these labels. The
//! strings are pre-interned by [`StringInterner::new`], and [`Labels`]
//! resolves them once so hot paths compare `Name`s.

use crate::{Name, StringInterner};

pub const ROOT: &str = "root";
pub const STRING: &str = "string";
pub const INT: &str = "int";
pub const FLOAT: &str = "float";
pub const IDENTIFIER: &str = "identifier";
pub const KEYWORD: &str = "keyword";
pub const VECTOR: &str = "vec";
pub const DICT: &str = "dict";
pub const PAIR: &str = "pair";
pub const QUOTE: &str = "quote";
pub const QUOTE_MARKER: &str = "'";
pub const COMMENT: &str = ";";
pub const RESOLVE: &str = "resolve";
pub const DEF: &str = "def";
pub const EVAL: &str = "eval";

/// Pre-interned structural labels.
#[derive(Clone, Copy, Debug)]
pub struct Labels {
    pub root: Name,
    pub string: Name,
    pub int: Name,
    pub float: Name,
    pub identifier: Name,
    pub keyword: Name,
    pub vector: Name,
    pub dict: Name,
    pub pair: Name,
    pub quote: Name,
    pub quote_marker: Name,
    pub comment: Name,
    pub resolve: Name,
    pub def: Name,
    pub eval: Name,
}

impl Labels {
    /// Resolve every structural label against `interner`.
    pub fn new(interner: &StringInterner) -> Self {
        Self {
            root: interner.intern(ROOT),
            string: interner.intern(STRING),
            int: interner.intern(INT),
            float: interner.intern(FLOAT),
            identifier: interner.intern(IDENTIFIER),
            keyword: interner.intern(KEYWORD),
            vector: interner.intern(VECTOR),
            dict: interner.intern(DICT),
            pair: interner.intern(PAIR),
            quote: interner.intern(QUOTE),
            quote_marker: interner.intern(QUOTE_MARKER),
            comment: interner.intern(COMMENT),
            resolve: interner.intern(RESOLVE),
            def: interner.intern(DEF),
            eval: interner.intern(EVAL),
        }
    }
}
