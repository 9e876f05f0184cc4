//! Host-defined values.

use std::any::Any;
use std::fmt;

use lingo_types::TypeDescriptor;

use super::Value;

/// A value whose type was registered by the host.
///
/// Implementors describe their type, render themselves and know how to
/// copy themselves. `dispose` runs when the binding holding the value is
/// reclaimed; override it to release external resources.
pub trait ExtensionValue: fmt::Debug + Send + Sync {
    fn type_descriptor(&self) -> TypeDescriptor;

    fn render(&self) -> String;

    /// Independent copy, wrapped back into a [`Value`].
    fn deep_copy(&self) -> Value;

    fn dispose(&self) {}

    /// Downcasting support for functions that consume this type.
    fn as_any(&self) -> &dyn Any;
}
