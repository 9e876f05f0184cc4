//! The built-in function contract.

use lingo_ir::SymbolTable;
use lingo_value::{EvalError, EvalResult};

use crate::{Environment, Frame, FunctionRegistry};

/// Usage line and prose for `desc`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Description {
    /// Call shape, e.g. `(concat a b)`.
    pub usage: String,
    pub summary: String,
}

impl Description {
    /// Builds the usage line from the function symbol and its parameter
    /// sketch; an empty sketch gives `(symbol)`.
    pub fn new(symbol: &str, params: &str, summary: impl Into<String>) -> Self {
        let usage = if params.is_empty() {
            format!("({symbol})")
        } else {
            format!("({symbol} {params})")
        };
        Description {
            usage,
            summary: summary.into(),
        }
    }
}

/// What a function may touch while it runs.
pub struct CallContext<'a> {
    pub env: &'a mut Environment,
    pub functions: &'a FunctionRegistry,
    pub symbols: &'a SymbolTable,
}

impl<'a> CallContext<'a> {
    pub fn new(
        env: &'a mut Environment,
        functions: &'a FunctionRegistry,
        symbols: &'a SymbolTable,
    ) -> Self {
        CallContext {
            env,
            functions,
            symbols,
        }
    }

    /// Shorter-lived context over the same environment, for nested evaluation.
    pub fn reborrow(&mut self) -> CallContext<'_> {
        CallContext {
            env: self.env,
            functions: self.functions,
            symbols: self.symbols,
        }
    }
}

/// A callable the evaluator dispatches to by node kind.
///
/// `validate` always runs first and must reject every frame `evaluate`
/// cannot handle, so `evaluate` only fails on conditions that depend on
/// the values themselves (overflow, missing bindings).
pub trait Function {
    /// Dispatch label; unique within a registry.
    fn symbol(&self) -> &str;

    fn describe(&self) -> Description;

    /// Inspect the arguments without consuming them.
    fn validate(&self, ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError>;

    /// Consume the arguments and produce the call's value.
    fn evaluate(&self, ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult;
}
