//! Lingo CLI

use lingoc::commands::{expand_file, parse_file, repl, run_file};

fn main() {
    lingoc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        repl();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "run" | "parse" | "expand" => {
            if args.len() < 3 {
                eprintln!("Usage: lingo {command} <file>");
                std::process::exit(1);
            }
            match command.as_str() {
                "run" => run_file(&args[2]),
                "parse" => parse_file(&args[2]),
                _ => expand_file(&args[2]),
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-v" => {
            println!("lingo {}", env!("CARGO_PKG_VERSION"));
        }
        // Anything else is a script path.
        _ => run_file(command),
    }
}

fn print_usage() {
    println!("Lingo, a small s-expression language");
    println!();
    println!("Usage: lingo [command] [file]");
    println!();
    println!("Commands:");
    println!("  (none)           Start the interactive loop");
    println!("  run <file>       Evaluate a script and print its value");
    println!("  <file>           Same as run");
    println!("  parse <file>     Print the parsed expression tree");
    println!("  expand <file>    Print the tree after macro expansion");
    println!("  help             Show this help message");
    println!("  version          Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG         Enable logging, e.g. RUST_LOG=lingo_eval=trace");
    println!("  LINGO_LOG_TREE   Log as an indented span tree");
    println!();
    println!("In the interactive loop, type exit or quit to leave.");
}
