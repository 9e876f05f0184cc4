//! Ordered macro expansion.

use lingo_ir::{walk, SExpr, SymbolTable};

use crate::{MacroError, MacroPass, QuoteMacro, ThreadMacro, ThreadMode};

/// Runs macro passes in registration order.
///
/// Each pass sees the output of the one before it. A pass that fails, or
/// finds nothing to rewrite, hands its input on unchanged; expansion as a
/// whole never fails.
#[derive(Default)]
pub struct MacroExpander {
    passes: Vec<Box<dyn MacroPass>>,
}

impl MacroExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Quote sugar, then `->`, then `->>`.
    pub fn with_default_passes(symbols: &mut SymbolTable) -> Result<Self, MacroError> {
        let mut expander = Self::new();
        expander.register(Box::new(QuoteMacro::new(symbols.labels())))?;
        expander.register(Box::new(ThreadMacro::new(ThreadMode::First, symbols)?))?;
        expander.register(Box::new(ThreadMacro::new(ThreadMode::Last, symbols)?))?;
        Ok(expander)
    }

    /// Append `pass`; its identifier must be new.
    pub fn register(&mut self, pass: Box<dyn MacroPass>) -> Result<(), MacroError> {
        if self.identifiers().any(|id| id == pass.identifier()) {
            return Err(MacroError::Duplicate(pass.identifier().to_owned()));
        }
        tracing::debug!(id = pass.identifier(), "registered macro pass");
        self.passes.push(pass);
        Ok(())
    }

    /// Pass identifiers in run order.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.passes.iter().map(|pass| pass.identifier())
    }

    /// Rewrite `tree` with every pass.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn expand(&mut self, tree: SExpr) -> SExpr {
        let mut current = tree;
        for pass in &mut self.passes {
            let outcome = walk(pass.as_mut(), &current).and_then(|()| pass.result());
            match outcome {
                Ok(rewritten) => {
                    tracing::debug!(pass = pass.identifier(), "macro applied");
                    current = rewritten;
                }
                Err(MacroError::NotApplicable(_)) => {
                    tracing::trace!(pass = pass.identifier(), "macro not applicable");
                }
                Err(err) => {
                    tracing::debug!(pass = pass.identifier(), %err, "macro skipped");
                }
            }
        }
        current
    }
}
