//! Type property flags.

use bitflags::bitflags;

bitflags! {
    /// Properties a value type advertises to function validation.
    ///
    /// Validation checks a property before looking at the payload. `add`
    /// needs `NUMERIC` and an integer payload, so a host type flagged
    /// `NUMERIC` still fails there.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeFlags: u32 {
        /// Scalar payload (strings, integers, raw text).
        const PRIMITIVE = 1 << 0;
        /// Holds other values (vectors, dictionaries).
        const COLLECTION = 1 << 1;
        /// Names something rather than being data (symbols, keywords).
        const SYMBOL = 1 << 2;
        /// Participates in arithmetic.
        const NUMERIC = 1 << 3;
        /// Captured, unevaluated expression.
        const EXPRESSION = 1 << 4;
    }
}

impl TypeFlags {
    /// True if every flag in `property` is set.
    #[inline]
    pub fn has(self, property: TypeFlags) -> bool {
        self.contains(property)
    }
}
