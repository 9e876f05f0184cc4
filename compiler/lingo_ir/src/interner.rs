//! String interner for expression labels.
//!
//! Labels are interned once and compared as [`Name`]s afterwards. Interned
//! strings are leaked so lookups can hand out `&'static str` without holding
//! the lock.

use super::Name;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Backing storage guarded by the interner's lock.
struct InternTable {
    map: FxHashMap<&'static str, Name>,
    strings: Vec<&'static str>,
}

impl InternTable {
    fn with_empty() -> Self {
        let empty: &'static str = "";
        let mut map = FxHashMap::default();
        map.insert(empty, Name::EMPTY);
        Self {
            map,
            strings: vec![empty],
        }
    }
}

/// Error when interning a string fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternError {
    /// More strings than a `u32` index can address.
    Overflow { count: usize },
}

impl std::fmt::Display for InternError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InternError::Overflow { count } => write!(
                f,
                "interner exceeded capacity: {} strings, max is {}",
                count,
                u32::MAX
            ),
        }
    }
}

impl std::error::Error for InternError {}

/// Label interner.
///
/// Uses a single `RwLock`: interning happens during bootstrap and parsing,
/// lookups dominate everywhere else.
pub struct StringInterner {
    table: RwLock<InternTable>,
}

impl StringInterner {
    /// Create a new interner with the language's structural labels pre-interned.
    pub fn new() -> Self {
        let interner = Self {
            table: RwLock::new(InternTable::with_empty()),
        };
        interner.pre_intern_labels();
        interner
    }

    /// Try to intern a string, returning its Name or an error on overflow.
    pub fn try_intern(&self, s: &str) -> Result<Name, InternError> {
        if let Some(name) = self.get(s) {
            return Ok(name);
        }

        let mut guard = self.table.write();

        // Double-check after acquiring write lock
        if let Some(&name) = guard.map.get(s) {
            return Ok(name);
        }

        let raw = u32::try_from(guard.strings.len()).map_err(|_| InternError::Overflow {
            count: guard.strings.len(),
        })?;
        let leaked: &'static str = Box::leak(s.to_owned().into_boxed_str());
        let name = Name::from_raw(raw);
        guard.strings.push(leaked);
        guard.map.insert(leaked, name);
        Ok(name)
    }

    /// Intern a string, returning its Name.
    ///
    /// # Panics
    /// Panics if more than `u32::MAX` strings are interned.
    #[inline]
    pub fn intern(&self, s: &str) -> Name {
        self.try_intern(s).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Look up a string without interning it.
    pub fn get(&self, s: &str) -> Option<Name> {
        self.table.read().map.get(s).copied()
    }

    /// Look up the string for a Name.
    pub fn lookup(&self, name: Name) -> &'static str {
        self.table.read().strings[name.index()]
    }

    fn pre_intern_labels(&self) {
        const LABELS: &[&str] = &[
            "root",
            "string",
            "int",
            "float",
            "identifier",
            "keyword",
            "vec",
            "dict",
            "pair",
            "quote",
            "'",
            ";",
            "resolve",
            "def",
            "eval",
        ];

        for label in LABELS {
            self.intern(label);
        }
    }

    /// Number of interned strings, including the empty string.
    pub fn len(&self) -> usize {
        self.table.read().strings.len()
    }

    /// Check if the interner holds only the empty string.
    pub fn is_empty(&self) -> bool {
        self.len() <= 1
    }
}

impl Default for StringInterner {
    fn default() -> Self {
        Self::new()
    }
}

/// Trait for looking up interned names.
///
/// Renderers and error paths take `&impl StringLookup` so they do not depend
/// on where the interner lives.
pub trait StringLookup {
    /// Look up the string for an interned name.
    fn lookup(&self, name: Name) -> &str;
}

impl StringLookup for StringInterner {
    fn lookup(&self, name: Name) -> &str {
        StringInterner::lookup(self, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_lookup() {
        let interner = StringInterner::new();

        let concat = interner.intern("concat");
        let add = interner.intern("add");
        let concat2 = interner.intern("concat");

        assert_eq!(concat, concat2);
        assert_ne!(concat, add);

        assert_eq!(interner.lookup(concat), "concat");
        assert_eq!(interner.lookup(add), "add");
    }

    #[test]
    fn test_empty_string() {
        let interner = StringInterner::new();
        assert_eq!(interner.intern(""), Name::EMPTY);
        assert_eq!(interner.lookup(Name::EMPTY), "");
    }

    #[test]
    fn test_labels_pre_interned() {
        let interner = StringInterner::new();
        let before = interner.len();

        assert!(interner.get("root").is_some());
        assert!(interner.get("'").is_some());
        interner.intern("identifier");

        assert_eq!(interner.len(), before);
    }

    #[test]
    fn test_get_does_not_intern() {
        let interner = StringInterner::new();
        let before = interner.len();

        assert_eq!(interner.get("never-seen"), None);
        assert_eq!(interner.len(), before);
    }

    #[test]
    fn test_lookup_through_trait() {
        fn render(lookup: &impl StringLookup, name: Name) -> String {
            format!("({})", lookup.lookup(name))
        }

        let interner = StringInterner::new();
        let name = interner.intern("->");
        assert_eq!(render(&interner, name), "(->)");
    }
}
