//! Interactive read-eval-print loop.
//!
//! Each input line is parsed and its root evaluated as a single
//! S-expression, so binding forms work unparenthesized: `def {x} 5`.

use std::io::{self, BufRead, Write};

use lye_eval::{eval, global_env, read};

/// Run the prompt until EOF.
pub fn run() -> io::Result<()> {
    println!("Lye Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+C to exit\n");

    let env = global_env();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("lye> ");
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            println!();
            return Ok(());
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match lye_parse::parse(input) {
            Ok(tree) => {
                let result = eval(&env, read(&tree));
                println!("{result}");
            }
            Err(error) => println!("Error: {error}"),
        }
    }
}
