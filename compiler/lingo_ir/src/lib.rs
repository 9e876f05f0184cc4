//! Lingo IR - expression trees and their traversal
//!
//! This crate contains the data structures every later phase shares:
//! - `Name` handles for interned labels and the `StringInterner` behind them
//! - `SymbolTable`, the registry of labels claimed as token identities
//! - `SExpr`, the parsed expression tree, with its two textual renderings
//! - `visitor`, the one depth-first traversal used by macros and evaluation
//!
//! # Design Philosophy
//!
//! - **Intern labels**: node kinds are `Name(u32)`; dispatch never compares strings
//! - **Own the tree**: nodes own their children, deep copy is `Clone`
//! - **One walker**: passes differ only in their visitor

mod interner;
pub mod labels;
mod name;
mod sexpr;
mod symbols;
pub mod visitor;

pub use interner::{InternError, StringInterner, StringLookup};
pub use labels::Labels;
pub use name::Name;
pub use sexpr::SExpr;
pub use symbols::{SymbolError, SymbolTable};
pub use visitor::{walk, ExpressionVisitor};
