//! Lingo Eval - tree-walking stack machine
//!
//! The evaluator is an [`ExpressionVisitor`](lingo_ir::ExpressionVisitor):
//! entering a function node opens a [`Frame`], leaving it runs the function
//! on that frame and hands the result to the parent frame. Everything the
//! language can do is a [`Function`] in the [`FunctionRegistry`].
//!
//! # Architecture
//!
//! - [`Environment`]: variable bindings, shared across evaluations
//! - [`Frame`] / [`EvalStack`]: argument lists of the calls in progress
//! - [`Function`] / [`CallContext`]: the extension contract for built-ins
//! - [`Evaluator`]: the visitor that drives dispatch
//! - [`Interpreter`] / [`InterpreterBuilder`]: bootstrap and the
//!   parse, expand, evaluate pipeline

pub mod args;
mod builtins;
mod environment;
mod errors;
mod evaluator;
mod frame;
mod function;
mod interpreter;
mod registry;

pub use environment::{is_hidden_name, Environment, HIDDEN_PREFIX, RECLAIM_PREFIX};
pub use errors::{LingoError, RegistryError};
pub use evaluator::Evaluator;
pub use frame::{EvalStack, Frame};
pub use function::{CallContext, Description, Function};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use registry::FunctionRegistry;
