//! Lingo Value - what evaluation produces
//!
//! - [`Value`]: the tagged result of every function call
//! - [`Dictionary`]: column-oriented records and their table rendering
//! - [`EvalError`]: structured evaluation errors with categorized kinds
//!
//! Values are immutable once built. Heap payloads are reference counted, so
//! handing a bound value back out of the environment never copies it; an
//! explicit [`Value::deep_copy`] does.

mod dictionary;
mod errors;
mod value;

pub use dictionary::Dictionary;
pub use errors::{
    integer_overflow, invalid_literal, invalid_variable_name, missing_column, too_few_args,
    too_many_args, undefined_function, undefined_variable, unknown_function, wrong_arg_count,
    wrong_arg_type, ErrorCategory, EvalError, EvalErrorKind, EvalNote, EvalResult,
};
pub use value::{ExtensionValue, Heap, ScalarInt, Value};
