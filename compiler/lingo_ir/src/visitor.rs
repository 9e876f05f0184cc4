//! Expression Visitor Pattern
//!
//! The single traversal algorithm over [`SExpr`] trees. Macro passes and the
//! evaluator are both visitors; neither walks the tree on its own.
//!
//! # Protocol
//!
//! [`walk`] calls `before()` once, then for each node, depth-first and left
//! to right:
//!
//! 1. `enter(node)`; returning `Ok(false)` refuses descent into the children.
//! 2. The children, in order, if descent was accepted.
//! 3. `leave(node)`, exactly once, whether or not the children were visited.
//!
//! When the tree is done, `after()` runs once. The first error from `enter`
//! or `leave` aborts the walk and is returned; `after()` does not run.
//!
//! # Example
//!
//! ```text
//! struct CountAtoms {
//!     count: usize,
//! }
//!
//! impl ExpressionVisitor for CountAtoms {
//!     type Error = std::convert::Infallible;
//!
//!     fn leave(&mut self, expr: &SExpr) -> Result<(), Self::Error> {
//!         if expr.is_atomic() {
//!             self.count += 1;
//!         }
//!         Ok(())
//!     }
//! }
//! ```

use lingo_stack::ensure_sufficient_stack;

use crate::SExpr;

/// Expression visitor trait.
///
/// The visitor mutates its own state; the tree stays immutable.
pub trait ExpressionVisitor {
    /// Error that aborts the walk.
    type Error;

    /// Setup, called once before the first node.
    fn before(&mut self) {}

    /// Called when entering a node. Return whether to visit its children.
    fn enter(&mut self, expr: &SExpr) -> Result<bool, Self::Error> {
        let _ = expr;
        Ok(true)
    }

    /// Called when leaving a node, after its children (if visited).
    fn leave(&mut self, expr: &SExpr) -> Result<(), Self::Error> {
        let _ = expr;
        Ok(())
    }

    /// Teardown, called once after a successful walk.
    fn after(&mut self) {}
}

/// Walk `root` with `visitor`.
pub fn walk<V: ExpressionVisitor + ?Sized>(visitor: &mut V, root: &SExpr) -> Result<(), V::Error> {
    visitor.before();
    walk_node(visitor, root)?;
    visitor.after();
    Ok(())
}

fn walk_node<V: ExpressionVisitor + ?Sized>(visitor: &mut V, expr: &SExpr) -> Result<(), V::Error> {
    ensure_sufficient_stack(|| {
        if visitor.enter(expr)? {
            for child in expr.children() {
                walk_node(visitor, child)?;
            }
        }
        visitor.leave(expr)
    })
}
