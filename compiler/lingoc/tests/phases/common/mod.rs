//! Shared test utilities for phase tests.

use lingo_eval::{Environment, Interpreter, LingoError};
use lingo_value::Value;

/// A default interpreter.
pub fn interpreter() -> Interpreter {
    Interpreter::new().unwrap()
}

/// Debug tree of `source` as parsed.
pub fn parsed_tree(interp: &Interpreter, source: &str) -> String {
    interp.parse(source).unwrap().render_tree(interp.symbols())
}

/// Debug tree of `source` after macro expansion.
pub fn expanded_tree(interp: &mut Interpreter, source: &str) -> String {
    let tree = interp.parse(source).unwrap();
    interp.expand(tree).render_tree(interp.symbols())
}

/// Evaluate `source` in a fresh environment and render the value.
pub fn rendered(interp: &mut Interpreter, source: &str) -> String {
    let value = interp.run(source).unwrap();
    interp.render(&value)
}

/// Evaluate lines in one session, returning every outcome as text.
pub fn session(interp: &mut Interpreter, lines: &[&str]) -> Vec<Result<Value, String>> {
    let mut env = Environment::new();
    lines
        .iter()
        .map(|line| {
            interp
                .evaluate(line, &mut env)
                .map_err(|err: LingoError| err.to_string())
        })
        .collect()
}
