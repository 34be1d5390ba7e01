//! Centralized error-value constructors for the evaluator.
//!
//! Language-level failures are data, not control flow: each constructor
//! formats one diagnostic of the error taxonomy into a `Value::Err`. The
//! messages name the offending function, the argument index and the
//! got/expected type or count — user-facing tooling relies on that shape.

use crate::value::Value;

/// A literal failed to parse as a number.
pub fn invalid_number() -> Value {
    Value::err("invalid number")
}

/// A symbol had no binding in any reachable frame.
pub fn unbound_symbol(name: &str) -> Value {
    Value::err(format!("Unbound Symbol '{name}'."))
}

/// An argument had the wrong type.
pub fn wrong_type(func: &str, index: usize, got: &str, expected: &str) -> Value {
    Value::err(format!(
        "Function '{func}' passed incorrect type for argument {index}. \
         Got {got}, Expected {expected}."
    ))
}

/// A builtin received the wrong number of arguments.
pub fn wrong_arg_count(func: &str, got: usize, expected: usize) -> Value {
    Value::err(format!(
        "Function '{func}' passed incorrect number of arguments. \
         Got {got}, Expected {expected}."
    ))
}

/// A list operation received `{}` where a non-empty list was required.
pub fn empty_argument(func: &str, index: usize) -> Value {
    Value::err(format!("Function '{func}' passed {{}} for argument {index}."))
}

/// The head of an S-expression was not a function.
pub fn not_a_function(got: &str) -> Value {
    Value::err(format!(
        "S-Expression starts with incorrect type. Got {got}, Expected Function."
    ))
}

/// Division by zero during arithmetic folding.
pub fn division_by_zero() -> Value {
    Value::err("Division By Zero.")
}

/// i64 overflow during arithmetic folding.
pub fn integer_overflow(func: &str) -> Value {
    Value::err(format!("Integer overflow in Function '{func}'."))
}

/// A lambda was applied to more arguments than it has formals.
pub fn too_many_arguments(got: usize, expected: usize) -> Value {
    Value::err(format!(
        "Function passed too many arguments. Got {got}, Expected {expected}."
    ))
}

/// A formals list contained something other than a symbol.
pub fn non_symbol_formal(got: &str) -> Value {
    Value::err(format!("Cannot define non-symbol. Got {got}, Expected Symbol."))
}

/// A binding form's name list contained something other than a symbol.
pub fn non_symbol_name(func: &str, got: &str) -> Value {
    Value::err(format!(
        "Function '{func}' cannot define non-symbol. Got {got}, Expected Symbol."
    ))
}

/// A binding form's name and value counts disagreed.
pub fn names_values_mismatch(func: &str, got: usize, expected: usize) -> Value {
    Value::err(format!(
        "Function '{func}' passed too many arguments for symbols. \
         Got {got}, Expected {expected}."
    ))
}
