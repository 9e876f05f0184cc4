//! Deferred evaluation.

use lingo_ir::{labels, walk};
use lingo_value::{wrong_arg_type, EvalError, EvalNote, EvalResult, Value};

use crate::{args, CallContext, Description, Evaluator, Frame, Function};

fn is_quoted(value: &Value) -> bool {
    matches!(value, Value::Quoted(_))
}

/// `(quote x)`: `x` unevaluated.
///
/// The evaluator does not descend into quote nodes; it hands the function
/// a copy of the whole `(quote x)` node instead.
pub(crate) struct Quote;

impl Function for Quote {
    fn symbol(&self) -> &str {
        labels::QUOTE
    }

    fn describe(&self) -> Description {
        Description::new(labels::QUOTE, "x", "quote expression s")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(labels::QUOTE, frame, 1)?;
        args::arg(labels::QUOTE, frame, 1, is_quoted)
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        args::pop(labels::QUOTE, frame)
    }
}

/// `(eval s)`: evaluate a quoted expression in the current environment.
pub(crate) struct Eval;

impl Function for Eval {
    fn symbol(&self) -> &str {
        labels::EVAL
    }

    fn describe(&self) -> Description {
        Description::new(labels::EVAL, "s", "evaluate sub-expression s")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(labels::EVAL, frame, 1)?;
        args::arg(labels::EVAL, frame, 1, is_quoted)
    }

    fn evaluate(&self, ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let quoted = args::pop(labels::EVAL, frame)?;
        let Some(expr) = quoted.as_quoted() else {
            return Err(wrong_arg_type(labels::EVAL, 1, &quoted));
        };

        // One level of quoting is the quote node itself.
        let target = match expr.children() {
            [inner] if expr.kind() == ctx.symbols.labels().quote => inner,
            _ => expr,
        };

        let mut evaluator = Evaluator::new(ctx.reborrow());
        walk(&mut evaluator, target)
            .map_err(|err| err.with_note(EvalNote::new("raised inside (eval)")))?;
        Ok(evaluator.result())
    }
}
