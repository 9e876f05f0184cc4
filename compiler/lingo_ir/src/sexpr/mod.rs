//! Expression trees.
//!
//! A node is `{kind, literal, children}`. It is atomic iff it has no
//! children; only atoms carry literal text. Each node owns its children, so
//! a tree is never shared and `Clone` is a full deep copy.

mod render;

use lingo_stack::ensure_sufficient_stack;

use crate::Name;

/// One parsed form.
#[derive(PartialEq, Eq, Debug)]
pub struct SExpr {
    kind: Name,
    literal: String,
    children: Vec<SExpr>,
}

impl SExpr {
    /// Compound node.
    pub fn new(kind: Name, children: Vec<SExpr>) -> Self {
        SExpr {
            kind,
            literal: String::new(),
            children,
        }
    }

    /// Atom carrying `literal`.
    pub fn atom(kind: Name, literal: impl Into<String>) -> Self {
        SExpr {
            kind,
            literal: literal.into(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn kind(&self) -> Name {
        self.kind
    }

    #[inline]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    #[inline]
    pub fn children(&self) -> &[SExpr] {
        &self.children
    }

    #[inline]
    pub fn is_atomic(&self) -> bool {
        self.children.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn push(&mut self, child: SExpr) {
        self.children.push(child);
    }

    /// Insert `child` before every existing child.
    pub fn push_front(&mut self, child: SExpr) {
        self.children.insert(0, child);
    }

    pub fn into_children(mut self) -> Vec<SExpr> {
        std::mem::take(&mut self.children)
    }

    /// Copy of this node without its children.
    pub fn shell(&self) -> SExpr {
        SExpr {
            kind: self.kind,
            literal: self.literal.clone(),
            children: Vec::with_capacity(self.children.len()),
        }
    }

    /// Structurally identical, fully independent tree.
    pub fn deep_copy(&self) -> SExpr {
        ensure_sufficient_stack(|| {
            let mut copy = self.shell();
            copy.children
                .extend(self.children.iter().map(SExpr::deep_copy));
            copy
        })
    }
}

impl Clone for SExpr {
    fn clone(&self) -> Self {
        self.deep_copy()
    }
}

// Iterative, so dropping a deeply nested tree cannot overflow the stack.
impl Drop for SExpr {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
