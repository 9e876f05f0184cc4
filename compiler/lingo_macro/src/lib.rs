//! Lingo Macro - syntactic sugar rewriting
//!
//! A macro pass is an [`ExpressionVisitor`](lingo_ir::ExpressionVisitor)
//! that rebuilds the tree it walks. The [`MacroExpander`] runs its passes
//! in registration order; a pass that fails leaves the tree as it was.
//!
//! Built-in passes, in default order:
//! - [`QuoteMacro`]: `'x` becomes `(quote x)`
//! - [`ThreadMacro`] first: `(-> a (f b))` becomes `(f a b)`
//! - [`ThreadMacro`] last: `(->> a (f b))` becomes `(f b a)`

mod error;
mod expander;
mod quote;
mod thread;

use lingo_ir::{ExpressionVisitor, SExpr};

pub use error::MacroError;
pub use expander::MacroExpander;
pub use quote::QuoteMacro;
pub use thread::{ThreadMacro, ThreadMode};

/// A rewrite pass driven by the tree walker.
///
/// `before()` must reset any state left from a previous walk, since one
/// pass instance is reused for every expansion.
pub trait MacroPass: ExpressionVisitor<Error = MacroError> {
    /// Unique name of the pass.
    fn identifier(&self) -> &str;

    /// The rewritten tree, or why there is none.
    fn result(&mut self) -> Result<SExpr, MacroError>;
}
