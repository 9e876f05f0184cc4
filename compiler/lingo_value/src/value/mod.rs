//! Runtime values for the lingo evaluator.
//!
//! # Heap Enforcement
//!
//! Every heap payload sits behind [`Heap`], whose constructor is private to
//! this module. Values are built through the factory methods:
//!
//! ```text
//! let s = Value::string("hello");              // OK
//! let v = Value::vector(vec![Value::int(1)]);  // OK
//! let s = Value::Str(Heap::new(...));          // ERROR: Heap::new is pub(super)
//! ```
//!
//! Cloning a `Value` shares its payload; [`Value::deep_copy`] does not.

mod extension;
mod heap;
mod scalar_int;

use std::any::Any;
use std::sync::Arc;

use lingo_ir::{SExpr, StringLookup};
use lingo_types::{builtin, TypeDescriptor, TypeFlags};

use crate::Dictionary;

pub use extension::ExtensionValue;
pub use heap::Heap;
pub use scalar_int::ScalarInt;

/// Value produced or consumed by a function.
#[derive(Clone, Debug)]
pub enum Value {
    /// Literal text of an atom before a furnishing function types it.
    RawText(Heap<String>),
    /// Variable name that has not been resolved.
    Symbol(Heap<String>),
    Int(ScalarInt),
    Str(Heap<String>),
    /// Dictionary key, spelled with its leading `:`.
    Keyword(Heap<String>),
    Vector(Heap<Vec<Value>>),
    Dict(Heap<Dictionary>),
    /// Unevaluated expression.
    Quoted(Heap<SExpr>),
    Empty,
    Extension(Heap<dyn ExtensionValue>),
}

// Factory Methods

impl Value {
    #[inline]
    pub fn raw_text(text: impl Into<String>) -> Self {
        Value::RawText(Heap::new(text.into()))
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(Heap::new(name.into()))
    }

    #[inline]
    pub fn int(value: i64) -> Self {
        Value::Int(ScalarInt::new(value))
    }

    #[inline]
    pub fn string(text: impl Into<String>) -> Self {
        Value::Str(Heap::new(text.into()))
    }

    #[inline]
    pub fn keyword(key: impl Into<String>) -> Self {
        Value::Keyword(Heap::new(key.into()))
    }

    #[inline]
    pub fn vector(items: Vec<Value>) -> Self {
        Value::Vector(Heap::new(items))
    }

    #[inline]
    pub fn dict(dictionary: Dictionary) -> Self {
        Value::Dict(Heap::new(dictionary))
    }

    #[inline]
    pub fn quoted(expr: SExpr) -> Self {
        Value::Quoted(Heap::new(expr))
    }

    /// Wrap a host value.
    pub fn extension<E: ExtensionValue + 'static>(value: E) -> Self {
        let arc: Arc<dyn ExtensionValue> = Arc::new(value);
        Value::Extension(Heap::from_arc(arc))
    }
}

// Value Methods

impl Value {
    pub fn type_descriptor(&self) -> TypeDescriptor {
        match self {
            Value::RawText(_) => builtin::CHARSEQ,
            Value::Symbol(_) => builtin::SYMBOL,
            Value::Int(_) => builtin::INTEGER,
            Value::Str(_) => builtin::STRING,
            Value::Keyword(_) => builtin::KEYWORD,
            Value::Vector(_) => builtin::VECTOR,
            Value::Dict(_) => builtin::DICT,
            Value::Quoted(_) => builtin::SEXP,
            Value::Empty => builtin::NIL,
            Value::Extension(ext) => ext.type_descriptor(),
        }
    }

    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_descriptor().name()
    }

    #[inline]
    pub fn has_property(&self, property: TypeFlags) -> bool {
        self.type_descriptor().has_property(property)
    }

    /// Text payload of raw text, symbols, strings and keywords.
    pub fn text(&self) -> Option<&str> {
        match self {
            Value::RawText(s) | Value::Symbol(s) | Value::Str(s) | Value::Keyword(s) => {
                Some(s.as_str())
            }
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<ScalarInt> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&Dictionary> {
        match self {
            Value::Dict(d) => Some(&**d),
            _ => None,
        }
    }

    pub fn as_quoted(&self) -> Option<&SExpr> {
        match self {
            Value::Quoted(expr) => Some(&**expr),
            _ => None,
        }
    }

    /// The host value, if this is an extension of type `E`.
    pub fn as_extension<E: Any>(&self) -> Option<&E> {
        match self {
            Value::Extension(ext) => ext.as_any().downcast_ref::<E>(),
            _ => None,
        }
    }

    /// User-facing text form.
    ///
    /// Vectors are comma-joined, dictionaries render as a table and quoted
    /// expressions in the indented tree form.
    pub fn render<L: StringLookup + ?Sized>(&self, lookup: &L) -> String {
        match self {
            Value::RawText(s) | Value::Symbol(s) | Value::Str(s) | Value::Keyword(s) => {
                s.as_str().to_owned()
            }
            Value::Int(n) => n.to_string(),
            Value::Vector(items) => items
                .iter()
                .map(|item| item.render(lookup))
                .collect::<Vec<_>>()
                .join(","),
            Value::Dict(d) => d.render_table(lookup),
            Value::Quoted(expr) => expr.render_tree(lookup),
            Value::Empty => "nil".to_string(),
            Value::Extension(ext) => ext.render(),
        }
    }

    /// Fully independent copy.
    pub fn deep_copy(&self) -> Value {
        match self {
            Value::RawText(s) => Value::raw_text(s.as_str()),
            Value::Symbol(s) => Value::symbol(s.as_str()),
            Value::Int(n) => Value::Int(*n),
            Value::Str(s) => Value::string(s.as_str()),
            Value::Keyword(s) => Value::keyword(s.as_str()),
            Value::Vector(items) => Value::vector(items.iter().map(Value::deep_copy).collect()),
            Value::Dict(d) => Value::dict(d.deep_copy()),
            Value::Quoted(expr) => Value::quoted(expr.deep_copy()),
            Value::Empty => Value::Empty,
            Value::Extension(ext) => ext.deep_copy(),
        }
    }

    /// Release host resources held by this value or anything inside it.
    pub fn dispose(&self) {
        match self {
            Value::Vector(items) => items.iter().for_each(Value::dispose),
            Value::Dict(d) => d.dispose(),
            Value::Extension(ext) => ext.dispose(),
            _ => {}
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::RawText(a), Value::RawText(b))
            | (Value::Symbol(a), Value::Symbol(b))
            | (Value::Str(a), Value::Str(b))
            | (Value::Keyword(a), Value::Keyword(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Vector(a), Value::Vector(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Quoted(a), Value::Quoted(b)) => a == b,
            (Value::Empty, Value::Empty) => true,
            (Value::Extension(a), Value::Extension(b)) => {
                a.type_descriptor() == b.type_descriptor() && a.render() == b.render()
            }
            _ => false,
        }
    }
}
