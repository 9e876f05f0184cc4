//! Threading macros.
//!
//! `(-> x (f a) (g b))` pipes `x` into `f` as its first argument, then the
//! result into `g`: `(g (f x a) b)`. `->>` inserts as the last argument.
//!
//! The pass mirrors every other node unchanged, so forms next to a
//! threading form survive the rewrite. A threading form is not descended
//! into; its children are expanded on their own, which handles threading
//! forms nested inside it.

use lingo_ir::{walk, ExpressionVisitor, Name, SExpr, SymbolTable};

use crate::{MacroError, MacroPass};

/// Where the threaded value is inserted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThreadMode {
    First,
    Last,
}

impl ThreadMode {
    /// Spelling of the macro in source.
    pub fn symbol(self) -> &'static str {
        match self {
            ThreadMode::First => "->",
            ThreadMode::Last => "->>",
        }
    }
}

pub struct ThreadMacro {
    mode: ThreadMode,
    symbol: Name,
    /// Copies of the ancestors of the current node, children filled in so far.
    shells: Vec<SExpr>,
    tree: Option<SExpr>,
    rewrites: usize,
}

impl ThreadMacro {
    /// Create the pass and claim its symbol as a token.
    pub fn new(mode: ThreadMode, symbols: &mut SymbolTable) -> Result<Self, MacroError> {
        let symbol = symbols.hook(mode.symbol())?;
        Ok(Self::with_symbol(mode, symbol))
    }

    fn with_symbol(mode: ThreadMode, symbol: Name) -> Self {
        ThreadMacro {
            mode,
            symbol,
            shells: Vec::new(),
            tree: None,
            rewrites: 0,
        }
    }

    fn attach(&mut self, node: SExpr) {
        match self.shells.last_mut() {
            Some(parent) => parent.push(node),
            None => self.tree = Some(node),
        }
    }

    /// Copy of `expr` with the threading forms inside it expanded.
    fn expand_nested(&self, expr: &SExpr) -> Result<SExpr, MacroError> {
        let mut nested = ThreadMacro::with_symbol(self.mode, self.symbol);
        walk(&mut nested, expr)?;
        nested.tree.take().ok_or(MacroError::ThreadTranslation)
    }

    fn thread(&self, form: &SExpr) -> Result<SExpr, MacroError> {
        let mut stack: Vec<SExpr> = Vec::with_capacity(1);
        for child in form.children() {
            let mut step = self.expand_nested(child)?;
            let Some(seed) = stack.pop() else {
                stack.push(step);
                continue;
            };
            if step.is_atomic() {
                return Err(MacroError::AtomicThreadTarget);
            }
            match self.mode {
                ThreadMode::First => step.push_front(seed),
                ThreadMode::Last => step.push(seed),
            }
            stack.push(step);
        }

        match (stack.pop(), stack.is_empty()) {
            (Some(threaded), true) => Ok(threaded),
            _ => Err(MacroError::ThreadTranslation),
        }
    }
}

impl ExpressionVisitor for ThreadMacro {
    type Error = MacroError;

    fn before(&mut self) {
        self.shells.clear();
        self.tree = None;
        self.rewrites = 0;
    }

    fn enter(&mut self, expr: &SExpr) -> Result<bool, MacroError> {
        if expr.kind() == self.symbol {
            return Ok(false);
        }
        self.shells.push(expr.shell());
        Ok(true)
    }

    fn leave(&mut self, expr: &SExpr) -> Result<(), MacroError> {
        if expr.kind() == self.symbol {
            let threaded = self.thread(expr)?;
            self.rewrites += 1;
            self.attach(threaded);
            return Ok(());
        }
        let node = self.shells.pop().ok_or(MacroError::ThreadTranslation)?;
        self.attach(node);
        Ok(())
    }
}

impl MacroPass for ThreadMacro {
    fn identifier(&self) -> &str {
        self.mode.symbol()
    }

    fn result(&mut self) -> Result<SExpr, MacroError> {
        if self.rewrites == 0 {
            return Err(MacroError::NotApplicable(self.identifier().to_owned()));
        }
        self.tree.take().ok_or(MacroError::ThreadTranslation)
    }
}
