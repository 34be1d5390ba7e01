//! The recursive evaluation algorithm.
//!
//! Two mutually recursive steps: `eval` resolves symbols and forwards
//! S-expressions to `eval_sexpr`; everything else is terminal. Function
//! application lives here too, including partial application: a lambda
//! called with fewer arguments than formals returns a new lambda waiting
//! for the rest.

use crate::builtins;
use crate::environment::EnvRef;
use crate::errors;
use crate::value::{LambdaVal, Value};

/// Evaluate a value in the given environment.
///
/// Numbers, errors, Q-expressions and functions evaluate to themselves;
/// symbols are resolved against the environment chain; S-expressions are
/// reduced by application.
pub fn eval(env: &EnvRef, value: Value) -> Value {
    match value {
        Value::Sym(name) => {
            let resolved = env.borrow().lookup(&name);
            resolved.unwrap_or_else(|| errors::unbound_symbol(&name))
        }
        Value::SExpr(children) => eval_sexpr(env, children),
        terminal => terminal,
    }
}

/// Reduce an S-expression.
///
/// Children evaluate left-to-right; the first error short-circuits and
/// becomes the whole result, with no later sibling evaluated. The empty
/// S-expression is the unit value and a single child collapses to itself.
fn eval_sexpr(env: &EnvRef, children: Vec<Value>) -> Value {
    let mut evaluated = Vec::with_capacity(children.len());
    for child in children {
        let result = eval(env, child);
        if result.is_err() {
            return result;
        }
        evaluated.push(result);
    }

    if evaluated.is_empty() {
        return Value::unit();
    }
    if evaluated.len() == 1 {
        return evaluated.remove(0);
    }

    let func = evaluated.remove(0);
    let args = evaluated;
    match func {
        Value::Builtin(builtin) => builtins::dispatch(env, builtin, args),
        Value::Lambda(lambda) => call_lambda(env, lambda, args),
        other => errors::not_a_function(other.type_name()),
    }
}

/// Apply a lambda to already-evaluated arguments.
///
/// Arguments bind to formals pairwise into the lambda's own frame. Too
/// many arguments fail; too few return the partially-applied lambda as a
/// first-class value. On full application the frame is parented to the
/// *calling* environment (free variables resolve at call time, not at
/// definition time — deliberate) and the body runs as an S-expression.
fn call_lambda(env: &EnvRef, mut lambda: Box<LambdaVal>, args: Vec<Value>) -> Value {
    let given = args.len();
    let expected = lambda.formals.len();
    if given > expected {
        return errors::too_many_arguments(given, expected);
    }

    let bound: Vec<String> = lambda.formals.drain(..given).collect();
    for (formal, arg) in bound.into_iter().zip(args) {
        lambda.env.put(formal, arg);
    }

    if !lambda.formals.is_empty() {
        // Partial application: the growing frame rides along in the value.
        return Value::Lambda(lambda);
    }

    let LambdaVal {
        body, env: mut frame, ..
    } = *lambda;
    frame.set_parent(env.clone());
    let call_env = EnvRef::new(frame);
    eval(&call_env, Value::SExpr(body))
}
