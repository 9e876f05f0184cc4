//! Functions that read or change the environment.

use lingo_ir::labels;
use lingo_value::{
    invalid_variable_name, undefined_variable, wrong_arg_type, Dictionary, EvalError, EvalResult,
    Value,
};

use crate::{args, is_hidden_name, CallContext, Description, Frame, Function};

const VARIABLE: &str = "Variable";
const TYPE: &str = "Type";
const VALUE: &str = "Value";

/// `(def a b)`: bind `b` to `a` and report the binding.
pub(crate) struct Def;

impl Function for Def {
    fn symbol(&self) -> &str {
        labels::DEF
    }

    fn describe(&self) -> Description {
        Description::new(
            labels::DEF,
            "a b",
            "Declare variable a and bind it to the result yielded by expression b",
        )
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(labels::DEF, frame, 2)?;
        args::arg(labels::DEF, frame, 1, |value| matches!(value, Value::Symbol(_)))?;
        match frame.get(0).and_then(Value::text) {
            Some(name) if is_hidden_name(name) => {
                Err(invalid_variable_name(labels::DEF, 1, name))
            }
            _ => Ok(()),
        }
    }

    fn evaluate(&self, ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let value = args::pop(labels::DEF, frame)?;
        let target = args::pop(labels::DEF, frame)?;
        let Value::Symbol(name) = &target else {
            return Err(wrong_arg_type(labels::DEF, 1, &target));
        };

        ctx.env.bind(name.as_str(), value.clone());
        tracing::trace!(name = name.as_str(), ty = value.type_name(), "bound variable");

        let mut record = Dictionary::new([VARIABLE, TYPE, VALUE]);
        record.add(TYPE, Value::string(value.type_name()))?;
        record.add(VARIABLE, target)?;
        record.add(VALUE, value)?;
        Ok(Value::dict(record))
    }
}

/// `(resolve a)`: the value bound to `a`. Identifiers outside a binding
/// position are redirected here.
pub(crate) struct Resolve;

impl Function for Resolve {
    fn symbol(&self) -> &str {
        labels::RESOLVE
    }

    fn describe(&self) -> Description {
        Description::new(labels::RESOLVE, "a", "Resolves variable a [Internal]")
    }

    fn validate(&self, ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(labels::RESOLVE, frame, 1)?;
        args::arg(labels::RESOLVE, frame, 1, args::is_raw_text)?;
        match frame.get(0).and_then(Value::text) {
            Some(name) if !ctx.env.contains(name) => {
                Err(undefined_variable(labels::RESOLVE, name))
            }
            _ => Ok(()),
        }
    }

    fn evaluate(&self, ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let name = args::pop_raw_text(labels::RESOLVE, frame, 1)?;
        ctx.env
            .lookup(&name)
            .cloned()
            .ok_or_else(|| undefined_variable(labels::RESOLVE, &name))
    }
}

/// `(bindings)`: every variable and the type of its value.
pub(crate) struct Bindings;

const BINDINGS: &str = "bindings";

impl Function for Bindings {
    fn symbol(&self) -> &str {
        BINDINGS
    }

    fn describe(&self) -> Description {
        Description::new(BINDINGS, "", "List all bindings in the current environment")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(BINDINGS, frame, 0)
    }

    fn evaluate(&self, ctx: &mut CallContext<'_>, _frame: &mut Frame) -> EvalResult {
        let mut record = Dictionary::new([VARIABLE, TYPE]);
        for (name, value) in ctx.env.sorted() {
            record.add(VARIABLE, Value::string(name))?;
            record.add(TYPE, Value::string(value.type_name()))?;
        }
        Ok(Value::dict(record))
    }
}

/// `(tidy)`: dispose and drop every binding.
pub(crate) struct Tidy;

const TIDY: &str = "tidy";

impl Function for Tidy {
    fn symbol(&self) -> &str {
        TIDY
    }

    fn describe(&self) -> Description {
        Description::new(TIDY, "", "Cleanup the environment")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(TIDY, frame, 0)
    }

    fn evaluate(&self, ctx: &mut CallContext<'_>, _frame: &mut Frame) -> EvalResult {
        ctx.env.tidy();
        Ok(Value::Empty)
    }
}
