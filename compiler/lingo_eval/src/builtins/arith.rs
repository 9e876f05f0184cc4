use lingo_types::TypeFlags;
use lingo_value::{integer_overflow, wrong_arg_type, EvalError, EvalResult, ScalarInt, Value};

use crate::{args, CallContext, Description, Frame, Function};

/// `(add a b ...)`: sum of integers, checked for overflow.
pub(crate) struct Add;

const ADD: &str = "add";

fn is_addend(value: &Value) -> bool {
    value.has_property(TypeFlags::NUMERIC) && value.as_int().is_some()
}

impl Function for Add {
    fn symbol(&self) -> &str {
        ADD
    }

    fn describe(&self) -> Description {
        Description::new(ADD, "a b", "Add numeric sub-expressions a and b")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_least(ADD, frame, 1)?;
        args::each_arg(ADD, frame, is_addend)
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let mut sum = ScalarInt::ZERO;
        while let Some(value) = frame.pop() {
            let Some(n) = value.as_int() else {
                return Err(wrong_arg_type(ADD, frame.len() + 1, &value));
            };
            sum = sum.checked_add(n).ok_or_else(|| integer_overflow(ADD))?;
        }
        Ok(Value::Int(sum))
    }
}
