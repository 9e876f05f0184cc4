//! The evaluating visitor.
//!
//! Evaluation is a post-order walk over the tree. Entering a function node
//! opens a call frame; its children leave their values on that frame; leaving
//! the node validates and runs the function, then moves the frame's contents
//! (now just the call's value) down to the parent frame.
//!
//! Two node kinds bend the rule:
//! - `quote` nodes are not descended into; the frame receives a copy of the
//!   unevaluated node instead.
//! - `identifier` nodes resolve their variable, except for the binding
//!   target of a `def`, which becomes a symbol.

use lingo_ir::{ExpressionVisitor, Labels, Name, SExpr};
use lingo_value::{undefined_function, EvalError, EvalResult, Value};

use crate::{CallContext, EvalStack};

pub struct Evaluator<'a> {
    ctx: CallContext<'a>,
    stack: EvalStack,
    /// Set on entering `def`; cleared once its target identifier is seen.
    binding: bool,
    labels: Labels,
}

impl<'a> Evaluator<'a> {
    pub fn new(ctx: CallContext<'a>) -> Self {
        let labels = *ctx.symbols.labels();
        Evaluator {
            ctx,
            stack: EvalStack::new(),
            binding: false,
            labels,
        }
    }

    /// Value left on top of the current frame, `Empty` if there is none.
    pub fn result(&self) -> Value {
        self.stack.current().peek().cloned().unwrap_or(Value::Empty)
    }

    /// True if every call frame opened during the walk was closed.
    pub fn is_balanced(&self) -> bool {
        self.stack.is_balanced()
    }

    /// Open call frames.
    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    fn is_function(&self, kind: Name) -> bool {
        self.ctx.functions.contains(kind)
    }

    /// Validate, then run, the function registered for `kind` on the
    /// current frame.
    fn dispatch(&mut self, kind: Name) -> EvalResult {
        let functions = self.ctx.functions;
        let Some(function) = functions.get(kind) else {
            return Err(undefined_function(self.ctx.symbols.text(kind)));
        };

        let frame = self.stack.current_mut();
        tracing::trace!(function = function.symbol(), args = frame.len(), "dispatch");
        function.validate(&self.ctx, frame)?;
        function.evaluate(&mut self.ctx, frame)
    }
}

impl ExpressionVisitor for Evaluator<'_> {
    type Error = EvalError;

    fn enter(&mut self, expr: &SExpr) -> Result<bool, EvalError> {
        let kind = expr.kind();
        if kind == self.labels.def {
            self.binding = true;
        }

        if self.is_function(kind) {
            self.stack.push_frame();
            if kind == self.labels.quote {
                self.stack
                    .current_mut()
                    .push(Value::quoted(expr.deep_copy()));
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn leave(&mut self, expr: &SExpr) -> Result<(), EvalError> {
        if expr.is_atomic() && !expr.literal().is_empty() {
            self.stack
                .current_mut()
                .push(Value::raw_text(expr.literal()));
        }

        let mut kind = expr.kind();
        if kind == self.labels.identifier {
            if self.binding {
                self.binding = false;
            } else {
                kind = self.labels.resolve;
            }
        }
        if expr.kind() == self.labels.def {
            self.binding = false;
        }

        let value = self.dispatch(kind)?;
        self.stack.current_mut().push(value);

        if self.is_function(expr.kind()) {
            if let Some(call) = self.stack.pop_frame() {
                self.stack.current_mut().append(call);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
