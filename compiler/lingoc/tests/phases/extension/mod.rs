//! Host extension tests.
//!
//! Registers a `bool` value type, a matcher that reads `true`/`false` as
//! `bool` atoms, the furnishing function for those atoms and two functions
//! over them, then drives everything through the normal pipeline.

use std::any::Any;

use lingo_eval::{args, CallContext, Description, Frame, Function, Interpreter, RegistryError};
use lingo_ir::{Name, SymbolTable};
use lingo_parse::{MatcherError, TokenMatcher};
use lingo_types::{TypeDescriptor, TypeFlags};
use lingo_value::{invalid_literal, wrong_arg_type, EvalError, EvalResult, ExtensionValue, Value};
use pretty_assertions::assert_eq;

const BOOL: &str = "bool";

#[derive(Debug)]
struct Bool {
    value: bool,
    ty: TypeDescriptor,
}

impl ExtensionValue for Bool {
    fn type_descriptor(&self) -> TypeDescriptor {
        self.ty
    }

    fn render(&self) -> String {
        self.value.to_string()
    }

    fn deep_copy(&self) -> Value {
        Value::extension(Bool {
            value: self.value,
            ty: self.ty,
        })
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn truth(value: &Value) -> Option<bool> {
    value.as_extension::<Bool>().map(|b| b.value)
}

struct BoolMatcher;

impl TokenMatcher for BoolMatcher {
    fn id(&self) -> &str {
        BOOL
    }

    fn classify(&self, word: &str, symbols: &SymbolTable) -> Option<Name> {
        let is_bool = word.eq_ignore_ascii_case("true") || word.eq_ignore_ascii_case("false");
        is_bool.then(|| symbols.hooked(BOOL)).flatten()
    }
}

/// Furnishes `bool` atoms.
struct FurnishBool {
    ty: TypeDescriptor,
}

fn parse_bool(literal: &str) -> Result<bool, EvalError> {
    if literal.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if literal.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(invalid_literal(BOOL, literal))
    }
}

impl Function for FurnishBool {
    fn symbol(&self) -> &str {
        BOOL
    }

    fn describe(&self) -> Description {
        Description::new(BOOL, "a", "Furnishing function for bool")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact(BOOL, frame, 1)?;
        args::arg(BOOL, frame, 1, args::is_raw_text)?;
        parse_bool(frame.get(0).and_then(Value::text).unwrap_or_default()).map(|_| ())
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let literal = args::pop_raw_text(BOOL, frame, 1)?;
        Ok(Value::extension(Bool {
            value: parse_bool(&literal)?,
            ty: self.ty,
        }))
    }
}

struct And {
    ty: TypeDescriptor,
}

impl Function for And {
    fn symbol(&self) -> &str {
        "and"
    }

    fn describe(&self) -> Description {
        Description::new("and", "p0 ... pN", "apply logical and on sub-expressions")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_least("and", frame, 1)?;
        args::each_arg("and", frame, |value| truth(value).is_some())
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let mut all = true;
        for (index, value) in frame.drain().iter().enumerate() {
            all &= truth(value).ok_or_else(|| wrong_arg_type("and", index + 1, value))?;
        }
        Ok(Value::extension(Bool {
            value: all,
            ty: self.ty,
        }))
    }
}

/// `(gt a b)` is `a > b`.
struct Gt {
    ty: TypeDescriptor,
}

impl Function for Gt {
    fn symbol(&self) -> &str {
        "gt"
    }

    fn describe(&self) -> Description {
        Description::new("gt", "a b", "true if a is greater than b")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::exact("gt", frame, 2)?;
        args::each_arg("gt", frame, |value| value.as_int().is_some())
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let b = args::pop("gt", frame)?;
        let a = args::pop("gt", frame)?;
        let (Some(a), Some(b)) = (a.as_int(), b.as_int()) else {
            return Err(wrong_arg_type("gt", 1, &a));
        };
        Ok(Value::extension(Bool {
            value: a.raw() > b.raw(),
            ty: self.ty,
        }))
    }
}

fn extended() -> Interpreter {
    let mut interp = Interpreter::builder()
        .matcher(Box::new(BoolMatcher))
        .build()
        .unwrap();
    let ty = interp.register_type(BOOL, TypeFlags::PRIMITIVE).unwrap();
    interp
        .register_function(Box::new(FurnishBool { ty }))
        .unwrap();
    interp.register_function(Box::new(And { ty })).unwrap();
    interp.register_function(Box::new(Gt { ty })).unwrap();
    interp
}

#[test]
fn bool_type_is_registered_after_builtins() {
    let interp = extended();
    let ty = interp.types().by_name(BOOL).unwrap();
    assert!(ty.has_property(TypeFlags::PRIMITIVE));
    assert!(!ty.has_property(TypeFlags::NUMERIC));
    assert_eq!(ty.id().index(), 10);
}

#[test]
fn matcher_classifies_bool_words() {
    let interp = extended();
    let want = "(root:
 (and:
  (bool true)
  (bool FALSE)
 )
)
";
    assert_eq!(crate::common::parsed_tree(&interp, "(and true FALSE)"), want);
}

#[test]
fn extension_functions_evaluate() {
    let mut interp = extended();
    assert_eq!(crate::common::rendered(&mut interp, "(and true true)"), "true");
    assert_eq!(crate::common::rendered(&mut interp, "(and true false)"), "false");
    assert_eq!(crate::common::rendered(&mut interp, "(gt 3 2)"), "true");
    assert_eq!(
        crate::common::rendered(&mut interp, "(and (gt 3 2) (gt 1 (add 1 1)))"),
        "false"
    );
}

#[test]
fn extension_values_bind_and_list() {
    let mut interp = extended();
    let outcomes = crate::common::session(
        &mut interp,
        &["(def yes true)", "(and yes yes)", "(bindings)"],
    );
    let listing = outcomes[2].as_ref().unwrap().as_dict().unwrap();
    assert_eq!(listing.column("Type").unwrap(), &[Value::string(BOOL)]);
    assert_eq!(
        outcomes[1].as_ref().map(truth),
        Ok(Some(true))
    );
}

#[test]
fn extension_type_errors_name_the_type() {
    let mut interp = extended();
    assert_eq!(
        crate::common::session(&mut interp, &["(concat true)", "(and 1)"])
            .into_iter()
            .map(|outcome| outcome.unwrap_err())
            .collect::<Vec<_>>(),
        vec![
            "(concat) unsupported type 'bool' for param 1".to_string(),
            "(and) unsupported type 'integer' for param 1".to_string(),
        ]
    );
}

#[test]
fn desc_lists_host_functions() {
    let mut interp = extended();
    let outcomes = crate::common::session(&mut interp, &["(desc :gt)"]);
    let record = outcomes[0].as_ref().unwrap().as_dict().unwrap();
    assert_eq!(
        record.column("Command").unwrap(),
        &[Value::string("(gt a b)")]
    );
}

#[test]
fn conflicting_registrations_fail() {
    let mut interp = extended();
    assert!(matches!(
        interp.register_matcher(Box::new(BoolMatcher)),
        Err(RegistryError::Matcher(MatcherError::Duplicate(_)))
    ));
    assert!(matches!(
        interp.register_type(BOOL, TypeFlags::PRIMITIVE),
        Err(RegistryError::Type(_))
    ));
    assert!(matches!(
        interp.register_function(Box::new(Gt {
            ty: lingo_types::builtin::UNKNOWN
        })),
        Err(RegistryError::DuplicateFunction(_))
    ));
}
