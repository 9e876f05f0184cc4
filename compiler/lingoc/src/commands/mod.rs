//! Command handlers for the lingo CLI.
//!
//! Handlers report failures on stderr and exit with status 1.

use lingo_eval::Interpreter;

/// The default interpreter. Bootstrap only fails on a registration conflict.
pub fn bootstrap() -> Interpreter {
    match Interpreter::new() {
        Ok(interp) => interp,
        Err(err) => {
            eprintln!("error: interpreter bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}

fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

/// Evaluate a script in a fresh environment and print its value.
pub fn run_file(path: &str) {
    let content = read_file(path);
    let mut interp = bootstrap();
    match interp.run(&content) {
        Ok(value) => println!("{}", interp.render(&value)),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Print the parsed tree of a script.
pub fn parse_file(path: &str) {
    let content = read_file(path);
    let interp = bootstrap();
    match interp.parse(&content) {
        Ok(tree) => print!("{}", tree.render_tree(interp.symbols())),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Print the tree of a script after macro expansion.
pub fn expand_file(path: &str) {
    let content = read_file(path);
    let mut interp = bootstrap();
    match interp.parse(&content) {
        Ok(tree) => {
            let expanded = interp.expand(tree);
            print!("{}", expanded.render_tree(interp.symbols()));
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    }
}

/// Interactive loop on stdin and stdout.
pub fn repl() {
    let mut interp = bootstrap();
    let mut env = lingo_eval::Environment::new();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(err) = crate::repl::run_loop(&mut interp, &mut env, stdin.lock(), &mut stdout) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
