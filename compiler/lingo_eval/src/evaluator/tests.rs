#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use crate::{Environment, Interpreter};
use lingo_ir::walk;
use lingo_value::{ErrorCategory, EvalErrorKind};
use pretty_assertions::assert_eq;

/// Walk `source` as parsed, without macro expansion.
fn run(
    interp: &Interpreter,
    env: &mut Environment,
    source: &str,
) -> (Result<(), EvalError>, Value, usize) {
    let tree = interp.parse(source).unwrap();
    let mut evaluator = Evaluator::new(CallContext::new(env, interp.functions(), interp.symbols()));
    let outcome = walk(&mut evaluator, &tree);
    let depth = evaluator.depth();
    (outcome, evaluator.result(), depth)
}

#[test]
fn test_stack_balanced_after_walk() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    let (outcome, result, depth) = run(&interp, &mut env, r#"(concat (concat "a" "b") "c")"#);
    assert_eq!(outcome, Ok(()));
    assert_eq!(result, Value::string("abc"));
    assert_eq!(depth, 0);
}

#[test]
fn test_empty_program_is_empty() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    let (outcome, result, _) = run(&interp, &mut env, "");
    assert_eq!(outcome, Ok(()));
    assert_eq!(result, Value::Empty);
}

#[test]
fn test_def_target_is_not_resolved() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    let (outcome, _, _) = run(&interp, &mut env, "(def x 42)");
    assert_eq!(outcome, Ok(()));
    assert_eq!(env.lookup("x"), Some(&Value::int(42)));
}

#[test]
fn test_identifiers_in_def_value_resolve() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    env.bind("y", Value::int(1));
    let (outcome, _, _) = run(&interp, &mut env, "(def x (add y 2))");
    assert_eq!(outcome, Ok(()));
    assert_eq!(env.lookup("x"), Some(&Value::int(3)));
}

#[test]
fn test_unbound_identifier_fails_lookup() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    let (outcome, _, _) = run(&interp, &mut env, "(concat x)");
    let err = outcome.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Lookup);
    assert_eq!(err.to_string(), "(resolve) variable 'x' not defined");
}

#[test]
fn test_resolve_shares_bound_value() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    env.bind("v", Value::vector(vec![Value::int(1), Value::int(2)]));
    let (outcome, result, _) = run(&interp, &mut env, "v");
    assert_eq!(outcome, Ok(()));

    let (Value::Vector(resolved), Some(Value::Vector(bound))) = (&result, env.lookup("v")) else {
        panic!("expected vectors, got {result:?}");
    };
    assert!(resolved.ptr_eq(bound));
}

#[test]
fn test_quote_is_not_descended() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    // `nope` would fail to resolve if the quoted body were evaluated.
    let (outcome, result, _) = run(&interp, &mut env, "(quote (concat nope))");
    assert_eq!(outcome, Ok(()));

    let quoted = result.as_quoted().unwrap();
    assert_eq!(quoted.kind(), interp.symbols().labels().quote);
    assert_eq!(quoted.render_values(interp.symbols()), "(quote (concat nope ) ) ");
}

#[test]
fn test_unregistered_kind_is_not_available() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    let (outcome, _, _) = run(&interp, &mut env, "3e4");
    let err = outcome.unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::UndefinedFunction { .. }));
    assert_eq!(err.to_string(), "Function 'float' not available");
}

#[test]
fn test_failed_validation_skips_evaluate() {
    let interp = Interpreter::new().unwrap();
    let mut env = Environment::new();
    let (outcome, _, _) = run(&interp, &mut env, r#"(def x "kept") (def y (add "a"))"#);
    assert_eq!(
        outcome.map_err(|err| err.to_string()),
        Err("(add) unsupported type 'string' for param 1".to_string())
    );
    assert!(env.contains("x"));
    assert!(!env.contains("y"));
}
