//! The parse, expand, evaluate pipeline.
//!
//! An [`Interpreter`] owns every registry: symbols, value types, functions,
//! token matchers and macro passes. They are filled during bootstrap by the
//! [`InterpreterBuilder`] (or the `register_*` methods) and only read while
//! evaluating. Variable bindings live outside, in an [`Environment`] the
//! caller keeps for as long as a session lasts.

mod builder;

pub use builder::InterpreterBuilder;

use lingo_ir::{walk, Name, SExpr, SymbolTable};
use lingo_macro::{MacroExpander, MacroPass};
use lingo_parse::{MatcherChain, ParseError, Parser, TokenMatcher};
use lingo_types::{TypeDescriptor, TypeFlags, TypeRegistry};
use lingo_value::{EvalResult, Value};

use crate::{CallContext, Environment, Evaluator, Function, FunctionRegistry, LingoError, RegistryError};

pub struct Interpreter {
    symbols: SymbolTable,
    types: TypeRegistry,
    functions: FunctionRegistry,
    matchers: MatcherChain,
    macros: MacroExpander,
    expand_macros: bool,
}

impl Interpreter {
    /// Interpreter with the built-in functions and macros only.
    pub fn new() -> Result<Self, RegistryError> {
        Self::builder().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    #[inline]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    #[inline]
    pub fn functions(&self) -> &FunctionRegistry {
        &self.functions
    }

    pub fn register_type(
        &mut self,
        name: &'static str,
        flags: TypeFlags,
    ) -> Result<TypeDescriptor, RegistryError> {
        Ok(self.types.register(name, flags)?)
    }

    /// Register `function` and hook its symbol for the parser.
    pub fn register_function(&mut self, function: Box<dyn Function>) -> Result<Name, RegistryError> {
        self.functions.register(function, &mut self.symbols)
    }

    /// Put `matcher` ahead of every matcher registered so far.
    pub fn register_matcher(&mut self, matcher: Box<dyn TokenMatcher>) -> Result<(), RegistryError> {
        Ok(self.matchers.hook(matcher)?)
    }

    /// Append a macro pass; it runs after the passes already registered.
    pub fn register_macro(&mut self, pass: Box<dyn MacroPass>) -> Result<(), RegistryError> {
        if self.symbols.hooked(pass.identifier()).is_none() {
            self.symbols.hook(pass.identifier())?;
        }
        Ok(self.macros.register(pass)?)
    }

    pub fn parse(&self, source: &str) -> Result<SExpr, ParseError> {
        Parser::new(&self.symbols, &self.matchers).parse(source)
    }

    /// Run the macro passes over `tree`, unless expansion is switched off.
    pub fn expand(&mut self, tree: SExpr) -> SExpr {
        if self.expand_macros {
            self.macros.expand(tree)
        } else {
            tree
        }
    }

    /// Parse, expand and evaluate `source` against `env`.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn evaluate(&mut self, source: &str, env: &mut Environment) -> Result<Value, LingoError> {
        let tree = self.parse(source)?;
        let tree = self.expand(tree);
        Ok(self.evaluate_tree(&tree, env)?)
    }

    /// Evaluate `source` in a fresh environment, as a script.
    pub fn run(&mut self, source: &str) -> Result<Value, LingoError> {
        let mut env = Environment::new();
        self.evaluate(source, &mut env)
    }

    /// Evaluate an already parsed (and expanded) tree.
    pub fn evaluate_tree(&self, tree: &SExpr, env: &mut Environment) -> EvalResult {
        let mut evaluator = Evaluator::new(CallContext::new(env, &self.functions, &self.symbols));
        walk(&mut evaluator, tree)?;
        if !evaluator.is_balanced() {
            tracing::warn!(open = evaluator.depth(), "evaluation ended with open call frames");
        }
        Ok(evaluator.result())
    }

    /// User-facing text of `value`.
    pub fn render(&self, value: &Value) -> String {
        value.render(&self.symbols)
    }
}
