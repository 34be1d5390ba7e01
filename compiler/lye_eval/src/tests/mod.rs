//! Evaluator tests driven through the full pipeline (lex → parse → read
//! → eval), the way the REPL drives it: one source line becomes one
//! top-level S-expression.

mod interpreter_tests;

use crate::{eval, global_env, read, EnvRef, Value};

/// Parse and evaluate one line against `env`.
fn eval_line(env: &EnvRef, source: &str) -> Value {
    let tree = lye_parse::parse(source).expect("test source parses");
    eval(env, read(&tree))
}

/// Evaluate one line in a fresh global environment.
fn eval_one(source: &str) -> Value {
    eval_line(&global_env(), source)
}
