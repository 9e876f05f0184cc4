//! REPL loop tests.
//!
//! The loop runs over in-memory input and output, so a transcript is just
//! the bytes it wrote.

use std::io::Cursor;

use lingo_eval::Environment;
use lingo_value::Value;
use lingoc::repl::{run_loop, PROMPT};
use pretty_assertions::assert_eq;

use crate::common::interpreter;

/// Run `input` through a fresh loop; return the transcript and the
/// environment it left behind.
fn transcript(input: &str) -> (String, Environment) {
    let mut interp = interpreter();
    let mut env = Environment::new();
    let mut output = Vec::new();
    run_loop(&mut interp, &mut env, Cursor::new(input), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), env)
}

#[test]
fn prints_values_and_says_goodbye() {
    let (out, _) = transcript("(concat \"a\" \"b\")\nexit\n");
    assert_eq!(out, format!("{PROMPT}ab\n{PROMPT}Bye\n"));
}

#[test]
fn quit_also_ends_the_loop() {
    let (out, _) = transcript("quit\n(add 1 2)\n");
    assert_eq!(out, format!("{PROMPT}Bye\n"));
}

#[test]
fn errors_are_printed_and_the_loop_continues() {
    let (out, _) = transcript("(concat 1)\n(add 1 2)\nexit\n");
    assert_eq!(
        out,
        format!("{PROMPT}(concat) unsupported type 'integer' for param 1\n{PROMPT}3\n{PROMPT}Bye\n")
    );
}

#[test]
fn blank_lines_are_skipped() {
    let (out, _) = transcript("\n   \n(add 1 1)\nexit\n");
    assert_eq!(
        out,
        format!("{PROMPT}{PROMPT}{PROMPT}2\n{PROMPT}Bye\n")
    );
}

#[test]
fn end_of_input_ends_the_line() {
    let (out, _) = transcript("(add 2 2)");
    assert_eq!(out, format!("{PROMPT}4\n{PROMPT}\n"));
}

#[test]
fn bindings_outlive_lines() {
    let (out, env) = transcript("(def who \"world\")\n(concat \"hello \" who)\nexit\n");
    assert!(out.contains("hello world"));
    assert_eq!(env.lookup("who"), Some(&Value::string("world")));
}

#[test]
fn reclaims_session_temporaries_on_exit() {
    let mut interp = interpreter();
    let mut env = Environment::new();
    env.bind("_v0", Value::int(1));
    env.bind("_keep", Value::int(2));
    env.bind("kept", Value::int(3));

    let mut output = Vec::new();
    run_loop(&mut interp, &mut env, Cursor::new("exit\n"), &mut output).unwrap();

    assert!(!env.contains("_v0"));
    assert!(env.contains("_keep"));
    assert!(env.contains("kept"));
}
