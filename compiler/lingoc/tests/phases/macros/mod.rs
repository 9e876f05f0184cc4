//! Macro phase tests.
//!
//! Threading needs functions that care about argument position, so these
//! tests register host arithmetic for `+`, `-` and `*`.

use lingo_eval::{args, CallContext, Description, Frame, Function, Interpreter};
use lingo_value::{integer_overflow, EvalError, EvalResult, ScalarInt, Value};
use pretty_assertions::assert_eq;

use crate::common::{expanded_tree, rendered};

/// Left fold of integer arguments in source order.
struct Arith {
    symbol: &'static str,
    op: fn(i64, i64) -> Option<i64>,
}

impl Function for Arith {
    fn symbol(&self) -> &str {
        self.symbol
    }

    fn describe(&self) -> Description {
        Description::new(self.symbol, "a b ...", "Integer arithmetic")
    }

    fn validate(&self, _ctx: &CallContext<'_>, frame: &Frame) -> Result<(), EvalError> {
        args::at_least(self.symbol, frame, 1)?;
        args::each_arg(self.symbol, frame, |value| value.as_int().is_some())
    }

    fn evaluate(&self, _ctx: &mut CallContext<'_>, frame: &mut Frame) -> EvalResult {
        let mut operands = frame
            .drain()
            .into_iter()
            .filter_map(|value| value.as_int().map(ScalarInt::raw));
        let first = operands.next().unwrap_or_default();
        operands
            .try_fold(first, |acc, n| (self.op)(acc, n))
            .map(Value::int)
            .ok_or_else(|| integer_overflow(self.symbol))
    }
}

fn with_arithmetic() -> Interpreter {
    Interpreter::builder()
        .function(Box::new(Arith {
            symbol: "+",
            op: i64::checked_add,
        }))
        .function(Box::new(Arith {
            symbol: "-",
            op: i64::checked_sub,
        }))
        .function(Box::new(Arith {
            symbol: "*",
            op: i64::checked_mul,
        }))
        .build()
        .unwrap()
}

#[test]
fn thread_first_nests_left_to_right() {
    let mut interp = with_arithmetic();
    let want = "(root:
 (*:
  (-:
   (+:
    (int 13)
    (int 4)
   )
   (int 5)
  )
  (int 3)
 )
)
";
    assert_eq!(expanded_tree(&mut interp, "(-> (+ 13 4) (- 5) (* 3))"), want);
    assert_eq!(rendered(&mut interp, "(-> (+ 13 4) (- 5) (* 3))"), "36");
}

#[test]
fn thread_last_appends() {
    let mut interp = with_arithmetic();
    let want = "(root:
 (-:
  (int 10)
  (int 2)
 )
)
";
    assert_eq!(expanded_tree(&mut interp, "(->> 2 (- 10))"), want);
    assert_eq!(rendered(&mut interp, "(->> 2 (- 10))"), "8");
}

#[test]
fn threading_forms_nest() {
    let mut interp = with_arithmetic();
    assert_eq!(
        rendered(&mut interp, "(-> 2 (- (->> 1 (+ 3))))"),
        "-2"
    );
}

#[test]
fn quote_sugar_wraps_the_next_form() {
    let mut interp = with_arithmetic();
    let want = "(root:
 (quote:
  (+:
   (int 13)
   (int 4)
   (int 4)
   (int 5)
  )
 )
)
";
    assert_eq!(expanded_tree(&mut interp, "'(+ 13 4 4 5)"), want);

    let quoted = "(quote:
 (+:
  (int 13)
  (int 4)
  (int 4)
  (int 5)
 )
)
";
    assert_eq!(rendered(&mut interp, "'(+ 13 4 4 5)"), quoted);
}

#[test]
fn eval_runs_a_quoted_form() {
    let mut interp = with_arithmetic();
    assert_eq!(rendered(&mut interp, "(eval '(+ 13 4 4 5))"), "26");
    assert_eq!(rendered(&mut interp, "(eval (quote (* 2 3)))"), "6");
}

#[test]
fn forms_beside_a_threading_form_survive() {
    let mut interp = with_arithmetic();
    assert_eq!(
        rendered(&mut interp, r#"(def x "unused") (-> 1 (+ 1))"#),
        "2"
    );
}

#[test]
fn switched_off_macros_leave_threading_unevaluable() {
    let mut interp = Interpreter::builder().without_macros().build().unwrap();
    assert_eq!(
        interp.run("(-> 1 (add 2))").unwrap_err().to_string(),
        "Function '->' not available"
    );
}

#[test]
fn arithmetic_overflow_is_reported() {
    let mut interp = with_arithmetic();
    assert_eq!(
        interp
            .run("(* 9223372036854775807 2)")
            .unwrap_err()
            .to_string(),
        "(*) integer overflow"
    );
}
