//! Evaluator for Lye.
//!
//! A tree-walking interpreter over S-expressions and Q-expressions:
//!
//! ```text
//! SyntaxNode (from lye_parse)
//!     │
//!     ▼
//! read() ──► Value
//!     │
//!     ▼
//! eval() ──► Value (result or error value)
//! ```
//!
//! Errors are ordinary values: every builtin validates its own arguments
//! and returns a `Value::Err` instead of aborting, and S-expression
//! evaluation short-circuits at the first error it produces. A result is
//! always a `Value` flowing back to the caller — there are no panics or
//! host exceptions in normal operation.

mod builtins;
mod environment;
pub mod errors;
mod interpreter;
mod reader;
mod value;

pub use builtins::{global_env, install, Builtin};
pub use environment::{Env, EnvRef};
pub use interpreter::eval;
pub use reader::read;
pub use value::{LambdaVal, Value};

#[cfg(test)]
mod tests;
