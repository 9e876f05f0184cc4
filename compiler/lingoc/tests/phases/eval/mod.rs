//! Evaluation phase tests.
//!
//! Whole programs through parse, expand and evaluate, checked on the
//! rendered value the way a script run prints it.

use lingo_value::Value;
use pretty_assertions::assert_eq;

use crate::common::{interpreter, rendered, session};

#[test]
fn dictionary_renders_as_table() {
    let mut interp = interpreter();
    let want = "+----------+----------+
| :OPTIONB | :OPTIONA |
+----------+----------+
| a,:b     | 1,2      |
+----------+----------+
";
    assert_eq!(
        rendered(&mut interp, r#"{ :optiona [ 1 2 ], :optionb [ "a" :b ] }"#),
        want
    );
}

#[test]
fn bindings_render_sorted() {
    let mut interp = interpreter();
    let want = "+----------+--------+
| VARIABLE |  TYPE  |
+----------+--------+
| job      | string |
+----------+--------+
| name     | string |
+----------+--------+
";
    assert_eq!(
        rendered(
            &mut interp,
            r#"(def name "Anna") (def job "Writer") (bindings)"#
        ),
        want
    );
}

#[test]
fn scalars_render_plainly() {
    let mut interp = interpreter();
    assert_eq!(rendered(&mut interp, r#"(concat "a" "b" "c")"#), "abc");
    assert_eq!(rendered(&mut interp, "(add 40 2)"), "42");
    assert_eq!(rendered(&mut interp, "[ 1 :two \"three\" ]"), "1,:two,three");
    assert_eq!(rendered(&mut interp, "; only a comment"), "nil");
    assert_eq!(rendered(&mut interp, ""), "nil");
}

#[test]
fn session_keeps_bindings_until_tidy() {
    let mut interp = interpreter();
    let outcomes = session(
        &mut interp,
        &[
            r#"(def greeting "hello")"#,
            r#"(concat greeting " world")"#,
            "(tidy)",
            "greeting",
        ],
    );
    assert_eq!(outcomes[1], Ok(Value::string("hello world")));
    assert_eq!(outcomes[2], Ok(Value::Empty));
    assert_eq!(
        outcomes[3],
        Err("(resolve) variable 'greeting' not defined".to_string())
    );
}

#[test]
fn rebinding_replaces_the_value() {
    let mut interp = interpreter();
    let outcomes = session(&mut interp, &["(def x 1)", r#"(def x "one")"#, "x"]);
    assert_eq!(outcomes[2], Ok(Value::string("one")));
}

#[test]
fn def_record_describes_the_binding() {
    let mut interp = interpreter();
    let outcomes = session(&mut interp, &["(def answer (add 40 2))"]);
    let record = outcomes[0].as_ref().unwrap().as_dict().unwrap();
    assert_eq!(record.headers(), ["Variable", "Type", "Value"]);
    assert_eq!(record.column("Variable").unwrap(), &[Value::symbol("answer")]);
    assert_eq!(record.column("Type").unwrap(), &[Value::string("integer")]);
    assert_eq!(record.column("Value").unwrap(), &[Value::int(42)]);
}

#[test]
fn errors_stop_the_line_not_the_session() {
    let mut interp = interpreter();
    let outcomes = session(
        &mut interp,
        &["(def x 1)", "(concat x)", "(def)", "(nosuch 1)", "x"],
    );
    assert_eq!(
        outcomes[1],
        Err("(concat) unsupported type 'integer' for param 1".to_string())
    );
    assert_eq!(
        outcomes[2],
        Err("(def) Wrong number of arguments (0 instead of 2)".to_string())
    );
    assert!(outcomes[3].is_err());
    assert_eq!(outcomes[4], Ok(Value::int(1)));
}

#[test]
fn desc_without_arguments_lists_everything() {
    let mut interp = interpreter();
    let outcomes = session(&mut interp, &["(desc)", "(desc :nosuch)"]);
    let listing = outcomes[0].as_ref().unwrap().as_dict().unwrap();
    let commands = listing.column("Command").unwrap();
    assert_eq!(commands.len(), interp.functions().len());
    assert_eq!(commands[0], Value::string("(root a)"));
    assert_eq!(
        outcomes[1],
        Err("(desc) could not find function 'nosuch'".to_string())
    );
}

#[test]
fn deeply_nested_program_runs_to_completion() {
    let depth = 20_000;
    let source = format!("{}\"a\"{}", "(concat ".repeat(depth), ")".repeat(depth));
    let mut interp = interpreter();
    assert_eq!(rendered(&mut interp, &source), "a");
}
