//! Symbol registry: labels that own a token identity.
//!
//! A label is *hooked* when a function or macro claims it. The lexer
//! classifies a bare word as its hooked label, so `concat` parses as a
//! `concat` node instead of an identifier. Hooking is append-only and a
//! second claim on the same label is a configuration error.

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{InternError, Labels, Name, StringInterner, StringLookup};

/// Symbol registration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("token '{0}' already linked")]
    Duplicate(String),
    #[error("cannot link an empty token label")]
    EmptyLabel,
    #[error(transparent)]
    Intern(#[from] InternError),
}

/// Interner plus the set of hooked labels.
pub struct SymbolTable {
    interner: StringInterner,
    labels: Labels,
    hooked: FxHashSet<Name>,
    order: Vec<Name>,
}

impl SymbolTable {
    pub fn new() -> Self {
        let interner = StringInterner::new();
        let labels = Labels::new(&interner);
        Self {
            interner,
            labels,
            hooked: FxHashSet::default(),
            order: Vec::new(),
        }
    }

    /// Claim `label` as a token identity.
    pub fn hook(&mut self, label: &str) -> Result<Name, SymbolError> {
        if label.is_empty() {
            return Err(SymbolError::EmptyLabel);
        }
        let name = self.interner.try_intern(label)?;
        if !self.hooked.insert(name) {
            return Err(SymbolError::Duplicate(label.to_owned()));
        }
        self.order.push(name);
        Ok(name)
    }

    /// The hooked label spelled `word`, if any.
    pub fn hooked(&self, word: &str) -> Option<Name> {
        self.interner
            .get(word)
            .filter(|name| self.hooked.contains(name))
    }

    pub fn is_hooked(&self, name: Name) -> bool {
        self.hooked.contains(&name)
    }

    /// Hooked labels in registration order.
    pub fn hooked_labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.order.iter().map(|&name| self.interner.lookup(name))
    }

    #[inline]
    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    #[inline]
    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    /// Intern an arbitrary label without hooking it.
    pub fn intern(&self, label: &str) -> Name {
        self.interner.intern(label)
    }

    /// Resolve a label without interning it.
    pub fn name(&self, label: &str) -> Option<Name> {
        self.interner.get(label)
    }

    /// Text of an interned name.
    pub fn text(&self, name: Name) -> &'static str {
        self.interner.lookup(name)
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        Self::new()
    }
}

impl StringLookup for SymbolTable {
    fn lookup(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }
}
