//! Tree plumbing and self-description.

use lingo_ir::labels;
use lingo_value::{unknown_function, wrong_arg_type, Dictionary, EvalError, EvalResult, Value};

use crate::{args, CallContext, Description, Frame, Function};

/// The top of every parsed program; yields the value of the last form.
pub(crate) struct Root;

impl Function for Root {
    fn symbol(&self) -> &str {
        labels::ROOT
    }

    fn describe(&self) -> Description {
        Description::new(
            labels::ROOT,
            "a",
            "Evaluates the subexpression and propagates the result [Internal]",
        )
    }

    fn validate(&self, _ctx: &CallContext<'_>, _frame: &Frame) -> Result<(), EvalError> {
        Ok(())
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        Ok(frame.pop().unwrap_or(Value::Empty))
    }
}

/// `; text`: swallows the comment.
pub(crate) struct Comment;

impl Function for Comment {
    fn symbol(&self) -> &str {
        labels::COMMENT
    }

    fn describe(&self) -> Description {
        Description::new(labels::COMMENT, "a", "Help with the evaluation of comments [Internal]")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_most(labels::COMMENT, frame, 1)
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        frame.drain();
        Ok(Value::Empty)
    }
}

/// `(desc)` or `(desc :name)`: usage and summary of registered functions.
pub(crate) struct Desc;

const DESC: &str = "desc";
const COMMAND: &str = "Command";
const DESCRIPTION: &str = "Description";

impl Function for Desc {
    fn symbol(&self) -> &str {
        DESC
    }

    fn describe(&self) -> Description {
        Description::new(
            DESC,
            ":x",
            "Provide a description for the function identified by the keyword x",
        )
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_most(DESC, frame, 1)?;
        if frame.is_empty() {
            return Ok(());
        }
        args::arg(DESC, frame, 1, |value| matches!(value, Value::Keyword(_)))
    }

    fn evaluate(&self, ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let mut record = Dictionary::new([COMMAND, DESCRIPTION]);
        let mut add = |description: Description| -> Result<(), EvalError> {
            record.add(COMMAND, Value::string(description.usage))?;
            record.add(DESCRIPTION, Value::string(description.summary))
        };

        match frame.pop() {
            None => {
                for function in ctx.functions.iter() {
                    add(function.describe())?;
                }
            }
            Some(Value::Keyword(key)) => {
                let name = key.strip_prefix(':').unwrap_or(key.as_str());
                let function = ctx
                    .functions
                    .by_label(name, ctx.symbols)
                    .ok_or_else(|| unknown_function(DESC, name))?;
                add(function.describe())?;
            }
            Some(other) => return Err(wrong_arg_type(DESC, 1, &other)),
        }
        Ok(Value::dict(record))
    }
}
