//! Lingo Types - value type descriptors
//!
//! A type is a name, a unique id and a [`TypeFlags`] property mask. The
//! [`TypeRegistry`] hands out ids; [`builtin`] holds the descriptors of the
//! types every interpreter starts with.

mod flags;
mod registry;

use std::fmt;

pub use flags::TypeFlags;
pub use registry::{builtin, TypeError, TypeRegistry};

/// Index of a type in its registry.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
#[repr(transparent)]
pub struct TypeId(u32);

impl TypeId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        TypeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Name, id and properties of a value type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDescriptor {
    id: TypeId,
    name: &'static str,
    flags: TypeFlags,
}

impl TypeDescriptor {
    pub const fn new(id: TypeId, name: &'static str, flags: TypeFlags) -> Self {
        TypeDescriptor { id, name, flags }
    }

    #[inline]
    pub const fn id(&self) -> TypeId {
        self.id
    }

    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub const fn flags(&self) -> TypeFlags {
        self.flags
    }

    /// True if the type carries every flag in `property`.
    #[inline]
    pub fn has_property(&self, property: TypeFlags) -> bool {
        self.flags.has(property)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
