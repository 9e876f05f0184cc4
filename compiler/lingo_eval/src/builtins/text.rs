use lingo_value::{wrong_arg_type, EvalError, EvalResult, Value};

use crate::{args, CallContext, Description, Frame, Function};

/// `(concat a b ...)`: strings joined in source order.
pub(crate) struct Concat;

const CONCAT: &str = "concat";

impl Function for Concat {
    fn symbol(&self) -> &str {
        CONCAT
    }

    fn describe(&self) -> Description {
        Description::new(CONCAT, "a b", "Concatenates string sub-expressions a and b")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_least(CONCAT, frame, 1)?;
        args::each_arg(CONCAT, frame, |value| matches!(value, Value::Str(_)))
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let mut joined = String::new();
        for (index, value) in frame.drain().iter().enumerate() {
            match value {
                Value::Str(text) => joined.push_str(text.as_str()),
                other => return Err(wrong_arg_type(CONCAT, index + 1, other)),
            }
        }
        Ok(Value::string(joined))
    }
}
