//! The interactive loop.

use std::io::{self, BufRead, Write};

use lingo_eval::{Environment, Interpreter};

/// Green-reset escape, then the marker.
pub const PROMPT: &str = "\x1b[32m\x1b[0m > ";

const FAREWELL: &str = "Bye";

/// Read lines from `input` until `exit`, `quit` or end of input, evaluating
/// each in `env` and writing the rendered value or error to `output`.
///
/// Blank lines are skipped. Before returning, even on an I/O error, the
/// environment reclaims its `_v` bindings.
pub fn run_loop<R: BufRead, W: Write>(
    interp: &mut Interpreter,
    env: &mut Environment,
    input: R,
    output: &mut W,
) -> io::Result<()> {
    let outcome = read_eval_print(interp, env, input, output);
    env.reclaim_hidden();
    outcome
}

fn read_eval_print<R: BufRead, W: Write>(
    interp: &mut Interpreter,
    env: &mut Environment,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return writeln!(output);
        }

        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "exit" || command == "quit" {
            return writeln!(output, "{FAREWELL}");
        }

        match interp.evaluate(command, env) {
            Ok(value) => writeln!(output, "{}", interp.render(&value))?,
            Err(err) => {
                tracing::debug!(%err, "line failed");
                writeln!(output, "{err}")?;
            }
        }
    }
}
