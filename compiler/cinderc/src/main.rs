//! Cinder lexer CLI.

use std::io::{self, IsTerminal};

use cinderc::commands::{bench_file, classify_words, lex_files};
use cinderc::options::{BenchOptions, LexOptions, OptionsError};
use cinderc::{init_tracing, CommandError};

const LEX_USAGE: &str = "Usage: cinder lex <file>... [--quiet] [--partial] [--color=<mode>]";
const BENCH_USAGE: &str = "Usage: cinder bench <file> [--iterations=<n>]";
const CLASSIFY_USAGE: &str = "Usage: cinder classify <word>...";

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];

    let result: Result<(), CommandError> = match command.as_str() {
        "lex" => {
            let options = parse_or_exit(LexOptions::parse(&args[2..]), LEX_USAGE);
            let use_colors = options.color.should_use_colors(io::stderr().is_terminal());
            lex_files(
                &options,
                use_colors,
                &mut io::stdout().lock(),
                &mut io::stderr().lock(),
            )
        }
        "bench" => {
            let options = parse_or_exit(BenchOptions::parse(&args[2..]), BENCH_USAGE);
            bench_file(&options).map(|report| println!("{report}"))
        }
        "classify" => {
            if args.len() < 3 {
                eprintln!("{CLASSIFY_USAGE}");
                std::process::exit(1);
            }
            classify_words(&args[2..], &mut io::stdout().lock())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("cinder {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Unwrap parsed options, or report the problem with `usage` and exit.
fn parse_or_exit<T>(parsed: Result<T, OptionsError>, usage: &str) -> T {
    match parsed {
        Ok(options) => options,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!("{usage}");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("Cinder lexer");
    println!();
    println!("Usage: cinder <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>...        Tokenize files and display their tokens");
    println!("  bench <file>         Time repeated tokenization of a file");
    println!("  classify <word>...   Show the token kind of each word");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Lex options:");
    println!("  --quiet, -q          Print only the token count per file");
    println!("  --partial            Also list the tokens before a scan error");
    println!("  --color=<mode>       Diagnostic colors: auto (default), always, never");
    println!();
    println!("Bench options:");
    println!("  --iterations=<n>     Number of scans to time (default: 1024)");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=cinder_lexer=debug   Per-scan summaries");
    println!("  RUST_LOG=cinder_lexer=trace   Per-token events");
    println!();
    println!("Examples:");
    println!("  cinder lex main.cin");
    println!("  cinder lex src/*.cin --quiet");
    println!("  cinder bench big.cin --iterations=4096");
    println!("  cinder classify if ifx '<<='");
}
