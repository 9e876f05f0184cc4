//! Append-only registry of value types.
//!
//! The built-in types are registered first, in a fixed order, so their ids
//! match the constants in [`builtin`]. Host types are appended during
//! bootstrap; names and ids are never reused or removed.

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::{TypeDescriptor, TypeFlags, TypeId};

/// Type registration failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("type '{0}' already registered")]
    Duplicate(&'static str),
    #[error("type registry is full")]
    Exhausted,
}

/// Descriptors of the built-in value types.
pub mod builtin {
    use crate::{TypeDescriptor, TypeFlags, TypeId};

    pub const NIL: TypeDescriptor = TypeDescriptor::new(TypeId::from_raw(0), "nil", TypeFlags::empty());
    pub const UNKNOWN: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(1), "unknown", TypeFlags::empty());
    pub const STRING: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(2), "string", TypeFlags::PRIMITIVE);
    pub const KEYWORD: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(3), "keyword", TypeFlags::SYMBOL);
    pub const INTEGER: TypeDescriptor = TypeDescriptor::new(
        TypeId::from_raw(4),
        "integer",
        TypeFlags::PRIMITIVE.union(TypeFlags::NUMERIC),
    );
    pub const SYMBOL: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(5), "symbol", TypeFlags::SYMBOL);
    pub const DICT: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(6), "dict", TypeFlags::COLLECTION);
    pub const VECTOR: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(7), "vector", TypeFlags::COLLECTION);
    pub const CHARSEQ: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(8), "charseq", TypeFlags::PRIMITIVE);
    pub const SEXP: TypeDescriptor =
        TypeDescriptor::new(TypeId::from_raw(9), "sexp", TypeFlags::EXPRESSION);

    /// All built-ins in id order.
    pub const ALL: [TypeDescriptor; 10] = [
        NIL, UNKNOWN, STRING, KEYWORD, INTEGER, SYMBOL, DICT, VECTOR, CHARSEQ, SEXP,
    ];
}

/// Registry of every known value type.
#[derive(Debug, Clone)]
pub struct TypeRegistry {
    types: Vec<TypeDescriptor>,
    by_name: FxHashMap<&'static str, TypeId>,
}

impl TypeRegistry {
    /// Create a registry holding the built-in types.
    pub fn new() -> Self {
        let mut registry = TypeRegistry {
            types: Vec::with_capacity(builtin::ALL.len()),
            by_name: FxHashMap::default(),
        };
        for descriptor in builtin::ALL {
            registry.by_name.insert(descriptor.name(), descriptor.id());
            registry.types.push(descriptor);
        }
        registry
    }

    /// Append a new type and return its descriptor.
    pub fn register(
        &mut self,
        name: &'static str,
        flags: TypeFlags,
    ) -> Result<TypeDescriptor, TypeError> {
        if self.by_name.contains_key(name) {
            return Err(TypeError::Duplicate(name));
        }
        let raw = u32::try_from(self.types.len()).map_err(|_| TypeError::Exhausted)?;
        let descriptor = TypeDescriptor::new(TypeId::from_raw(raw), name, flags);
        self.by_name.insert(name, descriptor.id());
        self.types.push(descriptor);
        tracing::debug!(name, id = raw, "registered value type");
        Ok(descriptor)
    }

    pub fn get(&self, id: TypeId) -> Option<TypeDescriptor> {
        self.types.get(id.index()).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<TypeDescriptor> {
        self.by_name.get(name).and_then(|&id| self.get(id))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Descriptors in id order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
