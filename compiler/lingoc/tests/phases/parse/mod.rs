//! Parser phase tests.
//!
//! Trees are built against the default interpreter's symbols, so every
//! built-in label classifies as its own node kind.

use lingo_parse::ParseError;
use pretty_assertions::assert_eq;

use crate::common::{interpreter, parsed_tree};

#[test]
fn builtin_labels_become_node_kinds() {
    let interp = interpreter();
    let want = r#"(root:
 (def:
  (identifier greeting)
  (concat:
   (string "hello ")
   (string "world")
  )
 )
 (desc:
  (keyword :def)
 )
)
"#;
    assert_eq!(
        parsed_tree(&interp, r#"(def greeting (concat "hello " "world")) (desc :def)"#),
        want
    );
}

#[test]
fn dictionary_literal_with_vectors() {
    let interp = interpreter();
    let want = r#"(root:
 (dict:
  (pair:
   (keyword :optiona)
   (vec:
    (int 1)
    (int 2)
   )
  )
  (pair:
   (keyword :optionb)
   (vec:
    (string "a")
    (keyword :b)
   )
  )
 )
)
"#;
    assert_eq!(
        parsed_tree(&interp, r#"{ :optiona [ 1 2 ], :optionb [ "a" :b ] }"#),
        want
    );
}

#[test]
fn values_rendering_is_single_line() {
    let interp = interpreter();
    let tree = interp.parse(r#"(concat "a" (concat "b")) :k"#).unwrap();
    assert_eq!(
        tree.render_values(interp.symbols()),
        r#"(root (concat "a" (concat "b" ) ) :k ) "#
    );
}

#[test]
fn macro_symbols_are_hooked() {
    let interp = interpreter();
    let want = "(root:
 (->:
  (int 1)
 )
 (->>:
  (int 2)
 )
)
";
    assert_eq!(parsed_tree(&interp, "(-> 1) (->> 2)"), want);
}

#[test]
fn malformed_sources_fail() {
    let interp = interpreter();
    assert!(matches!(
        interp.parse(r#"(concat "a" #)"#),
        Err(ParseError::UnexpectedChar { ch: '#', .. })
    ));
    assert!(matches!(
        interp.parse(r#"("a")"#),
        Err(ParseError::UnknownKind { .. })
    ));
    assert!(matches!(
        interp.parse(r#"(concat "a"]"#),
        Err(ParseError::UnexpectedCloser { found: ']', .. })
    ));
    assert!(matches!(
        interp.parse(r#"(concat "a""#),
        Err(ParseError::Unclosed { .. })
    ));
    assert!(matches!(
        interp.parse(r#"(concat "a)"#),
        Err(ParseError::UnterminatedString { .. })
    ));
}
