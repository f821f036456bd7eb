//! lexis CLI

use lexis::commands::{check_file, lex_file, stats_file};
use lexis_clike::LexOptions;

fn main() {
    lexis::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    match command.as_str() {
        "lex" => {
            let mut options = LexOptions::default();
            let mut file_path = None;

            for arg in args.iter().skip(2) {
                match arg.as_str() {
                    "--trivia" => options.keep_trivia = true,
                    "--split-shift" => options.split_shift = true,
                    "--no-recover" => options.recover = false,
                    other if other.starts_with('-') => {
                        eprintln!("error: unknown option '{other}'");
                        std::process::exit(1);
                    }
                    other if file_path.is_none() => file_path = Some(other),
                    _ => {}
                }
            }

            let Some(path) = file_path else {
                eprintln!("error: missing file path");
                eprintln!("Usage: lexis lex <file> [--trivia] [--split-shift] [--no-recover]");
                std::process::exit(1);
            };
            lex_file(path, &options);
        }
        "check" => {
            if args.len() < 3 {
                eprintln!("Usage: lexis check <file>");
                std::process::exit(1);
            }
            check_file(&args[2]);
        }
        "stats" => {
            if args.len() < 3 {
                eprintln!("Usage: lexis stats <file>");
                std::process::exit(1);
            }
            stats_file(&args[2]);
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("lexis {}", env!("CARGO_PKG_VERSION"));
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("lexis: trie-accelerated tokenizer (C-family grammar)");
    println!();
    println!("Usage: lexis <command> [options]");
    println!();
    println!("Commands:");
    println!("  lex <file>      Tokenize and display tokens");
    println!("  check <file>    Report diagnostics; exit 1 on errors");
    println!("  stats <file>    Count tokens by kind");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("Lex options:");
    println!("  --trivia        Keep whitespace, newlines and comments");
    println!("  --split-shift   Split `>>` into two `>` tokens");
    println!("  --no-recover    Stop at the first unexpected input");
    println!();
    println!("Environment:");
    println!("  RUST_LOG        Enable logging (e.g. RUST_LOG=lexis_core=debug)");
    println!("  LEXIS_LOG_TREE  Log as an indented span tree");
}
