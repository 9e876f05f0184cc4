//! Quote sugar: `'x` becomes `(quote x)`.
//!
//! The marker is a leaf of kind `'` produced by the parser. It is dropped
//! from the rebuilt tree and the sibling after it is wrapped instead.
//! Consecutive markers nest; a marker with no sibling after it fails the
//! pass.

use lingo_ir::{labels, ExpressionVisitor, Labels, Name, SExpr};

use crate::{MacroError, MacroPass};

/// A node being rebuilt and the markers waiting for its next child.
struct Frame {
    node: SExpr,
    pending: usize,
}

pub struct QuoteMacro {
    quote: Name,
    marker: Name,
    frames: Vec<Frame>,
    tree: Option<SExpr>,
    markers: usize,
}

impl QuoteMacro {
    pub fn new(labels: &Labels) -> Self {
        QuoteMacro {
            quote: labels.quote,
            marker: labels.quote_marker,
            frames: Vec::new(),
            tree: None,
            markers: 0,
        }
    }

    fn attach(&mut self, mut node: SExpr) -> Result<(), MacroError> {
        let is_marker = node.kind() == self.marker && node.is_atomic();
        let Some(parent) = self.frames.last_mut() else {
            if is_marker {
                return Err(MacroError::QuoteTranslation);
            }
            self.tree = Some(node);
            return Ok(());
        };

        if is_marker {
            self.markers += 1;
            parent.pending += 1;
            return Ok(());
        }
        for _ in 0..std::mem::take(&mut parent.pending) {
            node = SExpr::new(self.quote, vec![node]);
        }
        parent.node.push(node);
        Ok(())
    }
}

impl ExpressionVisitor for QuoteMacro {
    type Error = MacroError;

    fn before(&mut self) {
        self.frames.clear();
        self.tree = None;
        self.markers = 0;
    }

    fn enter(&mut self, expr: &SExpr) -> Result<bool, MacroError> {
        self.frames.push(Frame {
            node: expr.shell(),
            pending: 0,
        });
        Ok(true)
    }

    fn leave(&mut self, _expr: &SExpr) -> Result<(), MacroError> {
        let frame = self.frames.pop().ok_or(MacroError::QuoteTranslation)?;
        if frame.pending > 0 {
            return Err(MacroError::QuoteTranslation);
        }
        self.attach(frame.node)
    }
}

impl MacroPass for QuoteMacro {
    fn identifier(&self) -> &str {
        labels::QUOTE_MARKER
    }

    fn result(&mut self) -> Result<SExpr, MacroError> {
        if self.markers == 0 {
            return Err(MacroError::NotApplicable(self.identifier().to_owned()));
        }
        self.tree.take().ok_or(MacroError::QuoteTranslation)
    }
}
