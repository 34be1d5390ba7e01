//! CLI commands.

use std::fs;

use lye_eval::{eval, global_env, read, Value};

/// Evaluate a script file.
///
/// Each top-level form is evaluated separately against one global
/// environment (scripts parenthesize their forms); only error results
/// are printed. Returns a process exit code.
pub fn run_file(path: &str) -> i32 {
    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("error: cannot read '{path}': {error}");
            return 1;
        }
    };

    let tree = match lye_parse::parse(&source) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("error: {error}");
            return 1;
        }
    };

    // The root always reads as an S-expression holding the file's forms.
    let forms = match read(&tree) {
        Value::SExpr(forms) => forms,
        other => vec![other],
    };
    tracing::debug!(count = forms.len(), "evaluating top-level forms of {path}");

    let env = global_env();
    let mut failed = false;
    for form in forms {
        let result = eval(&env, form);
        if result.is_err() {
            println!("{result}");
            failed = true;
        }
    }

    i32::from(failed)
}
