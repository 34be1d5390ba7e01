//! Lye command-line interface.
//!
//! Two front ends over the same pipeline (parse → read → eval against a
//! global environment): an interactive prompt where each line is one
//! top-level S-expression, and a file runner that evaluates each
//! top-level form of a script separately.

pub mod commands;
pub mod repl;
