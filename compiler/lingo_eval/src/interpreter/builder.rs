//! `InterpreterBuilder` for bootstrapping an [`Interpreter`].

use lingo_ir::SymbolTable;
use lingo_macro::{MacroExpander, MacroPass};
use lingo_parse::{MatcherChain, TokenMatcher};
use lingo_types::{TypeFlags, TypeRegistry};

use super::Interpreter;
use crate::{builtins, Function, FunctionRegistry, RegistryError};

/// Collects host extensions, then registers them after the built-ins.
///
/// Nothing is validated until [`build`](Self::build), which reports the
/// first duplicate or otherwise invalid registration.
pub struct InterpreterBuilder {
    functions: Vec<Box<dyn Function>>,
    types: Vec<(&'static str, TypeFlags)>,
    matchers: Vec<Box<dyn TokenMatcher>>,
    macros: Vec<Box<dyn MacroPass>>,
    expand_macros: bool,
}

impl InterpreterBuilder {
    pub fn new() -> Self {
        InterpreterBuilder {
            functions: Vec::new(),
            types: Vec::new(),
            matchers: Vec::new(),
            macros: Vec::new(),
            expand_macros: true,
        }
    }

    /// Add a host function.
    #[must_use]
    pub fn function(mut self, function: Box<dyn Function>) -> Self {
        self.functions.push(function);
        self
    }

    /// Add a host value type.
    #[must_use]
    pub fn value_type(mut self, name: &'static str, flags: TypeFlags) -> Self {
        self.types.push((name, flags));
        self
    }

    /// Add a token matcher. Later matchers are consulted first.
    #[must_use]
    pub fn matcher(mut self, matcher: Box<dyn TokenMatcher>) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Add a macro pass, run after the built-in ones.
    #[must_use]
    pub fn macro_pass(mut self, pass: Box<dyn MacroPass>) -> Self {
        self.macros.push(pass);
        self
    }

    /// Evaluate trees exactly as parsed.
    ///
    /// The macro symbols stay reserved, so a `->` form then fails to
    /// evaluate instead of parsing as something else.
    #[must_use]
    pub fn without_macros(mut self) -> Self {
        self.expand_macros = false;
        self
    }

    pub fn build(self) -> Result<Interpreter, RegistryError> {
        let mut symbols = SymbolTable::new();

        let mut functions = FunctionRegistry::new();
        for function in builtins::defaults() {
            functions.register(function, &mut symbols)?;
        }
        let macros = MacroExpander::with_default_passes(&mut symbols)?;

        let mut interpreter = Interpreter {
            symbols,
            types: TypeRegistry::new(),
            functions,
            matchers: MatcherChain::new(),
            macros,
            expand_macros: self.expand_macros,
        };

        for (name, flags) in self.types {
            interpreter.register_type(name, flags)?;
        }
        for function in self.functions {
            interpreter.register_function(function)?;
        }
        for matcher in self.matchers {
            interpreter.register_matcher(matcher)?;
        }
        for pass in self.macros {
            interpreter.register_macro(pass)?;
        }

        tracing::debug!(
            functions = interpreter.functions.len(),
            types = interpreter.types.len(),
            "interpreter ready"
        );
        Ok(interpreter)
    }
}

impl Default for InterpreterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
