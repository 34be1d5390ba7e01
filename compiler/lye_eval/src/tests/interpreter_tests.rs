//! Core evaluation: terminals, S-expression reduction, error
//! short-circuiting.

use pretty_assertions::assert_eq;

use super::{eval_line, eval_one};
use crate::{global_env, Value};

#[test]
fn number_evaluates_to_itself() {
    assert_eq!(eval_one("5"), Value::num(5));
    assert_eq!(eval_one("-17"), Value::num(-17));
}

#[test]
fn qexpr_is_inert_data() {
    // The inner S-expression stays unevaluated inside a Q-expression.
    assert_eq!(
        eval_one("{1 2 (+ 1 2)}"),
        Value::qexpr(vec![
            Value::num(1),
            Value::num(2),
            Value::sexpr(vec![Value::sym("+"), Value::num(1), Value::num(2)]),
        ])
    );
}

#[test]
fn empty_sexpr_is_unit() {
    assert_eq!(eval_one("()"), Value::unit());
}

#[test]
fn single_child_collapses() {
    assert_eq!(eval_one("(5)"), Value::num(5));
    assert_eq!(eval_one("((5))"), Value::num(5));
}

#[test]
fn arithmetic_folds_left_to_right() {
    assert_eq!(eval_one("+ 1 2"), Value::num(3));
    assert_eq!(eval_one("- 10 3 2"), Value::num(5));
    assert_eq!(eval_one("* 2 3 4"), Value::num(24));
    assert_eq!(eval_one("/ 100 5 2"), Value::num(10));
}

#[test]
fn unary_minus_negates() {
    assert_eq!(eval_one("- 5"), Value::num(-5));
}

#[test]
fn nested_expressions_reduce_inside_out() {
    assert_eq!(eval_one("+ 1 (* 2 3)"), Value::num(7));
    assert_eq!(eval_one("+ (+ 1 2) (- 10 (* 2 3))"), Value::num(7));
}

#[test]
fn unbound_symbol_is_an_error_value() {
    assert_eq!(eval_one("mystery"), Value::err("Unbound Symbol 'mystery'."));
}

#[test]
fn sexpr_must_start_with_a_function() {
    assert_eq!(
        eval_one("(1 2 3)"),
        Value::err("S-Expression starts with incorrect type. Got Number, Expected Function.")
    );
}

#[test]
fn division_by_zero_is_an_error_value() {
    assert_eq!(eval_one("/ 10 0"), Value::err("Division By Zero."));
}

#[test]
fn first_error_short_circuits_later_siblings() {
    let env = global_env();
    // The division fails before the def sibling is ever evaluated, so
    // `leak` must stay unbound.
    let result = eval_line(&env, "+ (/ 1 0) (def {leak} 99)");
    assert_eq!(result, Value::err("Division By Zero."));
    assert_eq!(eval_line(&env, "leak"), Value::err("Unbound Symbol 'leak'."));
}

#[test]
fn wrong_operand_type_names_function_and_index() {
    assert_eq!(
        eval_one("+ 1 {}"),
        Value::err("Function '+' passed incorrect type for argument 1. Got Q-Expression, Expected Number.")
    );
    assert_eq!(
        eval_one("* head 2"),
        Value::err("Function '*' passed incorrect type for argument 0. Got Function, Expected Number.")
    );
}

#[test]
fn out_of_range_literal_reads_as_error() {
    assert_eq!(eval_one("99999999999999999999"), Value::err("invalid number"));
}

#[test]
fn arithmetic_overflow_is_an_error_value() {
    assert_eq!(
        eval_one("* 9223372036854775807 2"),
        Value::err("Integer overflow in Function '*'.")
    );
    assert_eq!(
        eval_one("- -9223372036854775808"),
        Value::err("Integer overflow in Function '-'.")
    );
}

#[test]
fn in_range_literals_survive_read_and_eval() {
    assert_eq!(eval_one("9223372036854775807"), Value::num(i64::MAX));
    assert_eq!(eval_one("-9223372036854775808"), Value::num(i64::MIN));
}

#[test]
fn builtins_resolve_through_the_environment() {
    // `head` alone evaluates to the builtin function value.
    assert_eq!(eval_one("head"), Value::Builtin(crate::Builtin::Head));
}
