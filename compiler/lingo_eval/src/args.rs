//! Argument checks shared by built-in and host functions.
//!
//! Positions in errors are 1-based, counted in source order.

use lingo_value::{
    too_few_args, too_many_args, wrong_arg_count, wrong_arg_type, EvalError, Value,
};

use crate::Frame;

/// Exactly `expected` arguments.
pub fn exact(function: &str, frame: &Frame, expected: usize) -> Result<(), EvalError> {
    if frame.len() == expected {
        Ok(())
    } else {
        Err(wrong_arg_count(function, frame.len(), expected))
    }
}

/// At least `minimum` arguments.
pub fn at_least(function: &str, frame: &Frame, minimum: usize) -> Result<(), EvalError> {
    if frame.len() >= minimum {
        Ok(())
    } else {
        Err(too_few_args(function, frame.len(), minimum))
    }
}

/// At most `maximum` arguments.
pub fn at_most(function: &str, frame: &Frame, maximum: usize) -> Result<(), EvalError> {
    if frame.len() <= maximum {
        Ok(())
    } else {
        Err(too_many_args(function, frame.len(), maximum))
    }
}

/// Every argument satisfies `accepts`; reports the first that does not.
pub fn each_arg(
    function: &str,
    frame: &Frame,
    accepts: impl Fn(&Value) -> bool,
) -> Result<(), EvalError> {
    match frame.items().iter().position(|value| !accepts(value)) {
        None => Ok(()),
        Some(index) => Err(wrong_arg_type(function, index + 1, &frame.items()[index])),
    }
}

/// The argument at 1-based `position` exists and satisfies `accepts`.
pub fn arg(
    function: &str,
    frame: &Frame,
    position: usize,
    accepts: impl Fn(&Value) -> bool,
) -> Result<(), EvalError> {
    let Some(value) = position.checked_sub(1).and_then(|index| frame.get(index)) else {
        return Err(too_few_args(function, frame.len(), position));
    };
    if accepts(value) {
        Ok(())
    } else {
        Err(wrong_arg_type(function, position, value))
    }
}

/// Pop the last argument.
pub fn pop(function: &str, frame: &mut Frame) -> Result<Value, EvalError> {
    frame
        .pop()
        .ok_or_else(|| too_few_args(function, 0, 1))
}

/// Pop the last argument, which must be an unfurnished atom literal.
///
/// `position` is the argument's 1-based position, used in the type error.
pub fn pop_raw_text(
    function: &str,
    frame: &mut Frame,
    position: usize,
) -> Result<String, EvalError> {
    match pop(function, frame)? {
        Value::RawText(text) => Ok(text.as_str().to_owned()),
        other => Err(wrong_arg_type(function, position, &other)),
    }
}

/// True for unfurnished atom literals.
#[inline]
pub fn is_raw_text(value: &Value) -> bool {
    matches!(value, Value::RawText(_))
}
