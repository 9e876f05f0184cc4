//! Furnishing functions: typed values from atom literals.

use lingo_ir::labels;
use lingo_value::{invalid_literal, wrong_arg_count, EvalError, EvalResult, Value};

use crate::{args, CallContext, Description, Frame, Function};

fn one_raw_text(function: &str, frame: &Frame) -> Result<(), EvalError> {
    args::exact(function, frame, 1)?;
    args::arg(function, frame, 1, args::is_raw_text)
}

/// Identifier in binding position; becomes a symbol.
pub(crate) struct Identifier;

impl Function for Identifier {
    fn symbol(&self) -> &str {
        labels::IDENTIFIER
    }

    fn describe(&self) -> Description {
        Description::new(labels::IDENTIFIER, "a", "Returns an identifier handle [Internal]")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        one_raw_text(labels::IDENTIFIER, frame)
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        args::pop_raw_text(labels::IDENTIFIER, frame, 1).map(Value::symbol)
    }
}

/// String literal. `""` has no literal and so no argument.
pub(crate) struct Str;

impl Function for Str {
    fn symbol(&self) -> &str {
        labels::STRING
    }

    fn describe(&self) -> Description {
        Description::new(labels::STRING, "a", "Furnishing function for string [Internal]")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        match frame.len() {
            0 => Ok(()),
            1 => args::arg(labels::STRING, frame, 1, args::is_raw_text),
            n => Err(wrong_arg_count(labels::STRING, n, 1)),
        }
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        if frame.is_empty() {
            return Ok(Value::string(""));
        }
        args::pop_raw_text(labels::STRING, frame, 1).map(Value::string)
    }
}

pub(crate) struct Int;

fn parse_int(literal: &str) -> Result<i64, EvalError> {
    literal
        .parse::<i64>()
        .map_err(|_| invalid_literal(labels::INT, literal))
}

impl Function for Int {
    fn symbol(&self) -> &str {
        labels::INT
    }

    fn describe(&self) -> Description {
        Description::new(labels::INT, "a", "Furnishing function for integers [Internal]")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        one_raw_text(labels::INT, frame)?;
        match frame.get(0).and_then(Value::text) {
            Some(literal) => parse_int(literal).map(|_| ()),
            None => Ok(()),
        }
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let literal = args::pop_raw_text(labels::INT, frame, 1)?;
        parse_int(&literal).map(Value::int)
    }
}

pub(crate) struct Keyword;

impl Function for Keyword {
    fn symbol(&self) -> &str {
        labels::KEYWORD
    }

    fn describe(&self) -> Description {
        Description::new(labels::KEYWORD, "a", "Furnishing function for keywords [Internal]")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        one_raw_text(labels::KEYWORD, frame)
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        args::pop_raw_text(labels::KEYWORD, frame, 1).map(Value::keyword)
    }
}
