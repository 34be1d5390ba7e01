//! Lye CLI entry point.

use lyec::{commands, repl};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    let code = match args.get(1).map(String::as_str) {
        None | Some("repl") => match repl::run() {
            Ok(()) => 0,
            Err(error) => {
                eprintln!("error: {error}");
                1
            }
        },
        Some("run") => match args.get(2) {
            Some(path) => commands::run_file(path),
            None => {
                eprintln!("Usage: lye run <file.lye>");
                1
            }
        },
        Some("help" | "--help" | "-h") => {
            print_usage();
            0
        }
        Some(path) if !path.starts_with('-') => commands::run_file(path),
        Some(other) => {
            eprintln!("error: unknown option '{other}'");
            print_usage();
            1
        }
    };

    std::process::exit(code);
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

fn print_usage() {
    println!("Usage: lye [command]");
    println!();
    println!("Commands:");
    println!("  <file.lye>       Evaluate a script file");
    println!("  run <file.lye>   Evaluate a script file");
    println!("  repl             Start the interactive prompt (default)");
    println!("  help             Show this message");
}
