//! Variable bindings.
//!
//! A flat map from name to value. Names starting with [`HIDDEN_PREFIX`]
//! cannot be bound by `def`; hosts use them for bindings of their own.
//! Names starting with [`RECLAIM_PREFIX`] are dropped by
//! [`Environment::reclaim_hidden`] when a session ends.

use rustc_hash::FxHashMap;

use lingo_value::Value;

/// Names with this prefix are reserved for the host.
pub const HIDDEN_PREFIX: &str = "_";

/// Hidden names with this prefix are reclaimed at the end of a session.
pub const RECLAIM_PREFIX: &str = "_v";

/// True if `def` must refuse `name`.
#[inline]
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with(HIDDEN_PREFIX)
}

#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name`, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bindings ordered by name.
    pub fn sorted(&self) -> Vec<(&str, &Value)> {
        let mut entries: Vec<_> = self
            .bindings
            .iter()
            .map(|(name, value)| (name.as_str(), value))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Dispose every value, then remove every binding.
    pub fn tidy(&mut self) {
        for value in self.bindings.values() {
            value.dispose();
        }
        self.bindings.clear();
        tracing::debug!("environment tidied");
    }

    /// Dispose and remove the bindings named with [`RECLAIM_PREFIX`].
    ///
    /// Returns how many bindings were removed.
    pub fn reclaim_hidden(&mut self) -> usize {
        let before = self.bindings.len();
        self.bindings.retain(|name, value| {
            if name.starts_with(RECLAIM_PREFIX) {
                value.dispose();
                false
            } else {
                true
            }
        });
        let reclaimed = before - self.bindings.len();
        tracing::debug!(reclaimed, "reclaimed hidden bindings");
        reclaimed
    }
}
