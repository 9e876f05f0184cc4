//! Data literals: `{ :k v, ... }` and `[ a b ... ]`.

use lingo_ir::labels;
use lingo_value::{wrong_arg_type, Dictionary, EvalError, EvalResult, Value};

use crate::{args, CallContext, Description, Frame, Function};

/// One `:key value` entry of a dictionary literal.
pub(crate) struct Pair;

impl Function for Pair {
    fn symbol(&self) -> &str {
        labels::PAIR
    }

    fn describe(&self) -> Description {
        Description::new(
            labels::PAIR,
            ":a b",
            "Generate a data pair with the symbol a and the result of the (string|int) sub-expression b [Internal]",
        )
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(labels::PAIR, frame, 2)?;
        args::arg(labels::PAIR, frame, 1, |value| matches!(value, Value::Keyword(_)))
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let value = args::pop(labels::PAIR, frame)?;
        let key = args::pop(labels::PAIR, frame)?;
        let Value::Keyword(key) = &key else {
            return Err(wrong_arg_type(labels::PAIR, 1, &key));
        };
        let mut record = Dictionary::new([key.as_str()]);
        record.add(key, value)?;
        Ok(Value::dict(record))
    }
}

/// Merges the pairs of a dictionary literal.
///
/// Operands are folded right to left, each earlier operand merged over the
/// accumulator, so on a repeated key the leftmost entry wins.
pub(crate) struct Dict;

impl Function for Dict {
    fn symbol(&self) -> &str {
        labels::DICT
    }

    fn describe(&self) -> Description {
        Description::new(
            labels::DICT,
            "(p0) ... (pN)",
            "Generates a dictionary from a sequence of pairs (pX) [Internal]",
        )
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_least(labels::DICT, frame, 1)?;
        args::each_arg(labels::DICT, frame, |value| matches!(value, Value::Dict(_)))
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let mut merged: Option<Dictionary> = None;
        while let Some(value) = frame.pop() {
            let Some(operand) = value.as_dict() else {
                return Err(wrong_arg_type(labels::DICT, frame.len() + 1, &value));
            };
            merged = Some(match merged {
                Some(accumulated) => accumulated.merge(operand),
                None => operand.clone(),
            });
        }
        Ok(merged.map_or(Value::Empty, Value::dict))
    }
}

/// `[ a b ... ]` literal.
pub(crate) struct Vector;

fn is_element(value: &Value) -> bool {
    matches!(value, Value::Keyword(_) | Value::Str(_) | Value::Int(_))
}

impl Function for Vector {
    fn symbol(&self) -> &str {
        labels::VECTOR
    }

    fn describe(&self) -> Description {
        Description::new(
            labels::VECTOR,
            "(p0) ... (pN)",
            "Generate a vector from (string|int|keyword) subexpressions pX [Internal]",
        )
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_least(labels::VECTOR, frame, 1)?;
        args::each_arg(labels::VECTOR, frame, is_element)
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        Ok(Value::vector(frame.drain()))
    }
}
