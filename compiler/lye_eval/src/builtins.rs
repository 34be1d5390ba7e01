//! The builtin library: the closed set of primitive operations.
//!
//! Each builtin receives the calling environment and a list of
//! already-evaluated arguments, owns full responsibility for validating
//! them, and returns a result value (possibly an error value).

use std::fmt;

use crate::environment::{Env, EnvRef};
use crate::errors;
use crate::interpreter;
use crate::value::Value;

/// Identifier of a primitive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    /// `list` — package arguments into a Q-expression.
    List,
    /// `head` — first element of a Q-expression, as a Q-expression.
    Head,
    /// `tail` — Q-expression with its first element removed.
    Tail,
    /// `eval` — evaluate a Q-expression as an S-expression.
    Eval,
    /// `join` — concatenate Q-expressions.
    Join,
    /// `\` — construct a lambda from formals and body.
    Lambda,
    /// `def` — bind names in the root frame.
    Def,
    /// `=` — bind names in the calling frame.
    Put,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Builtin {
    /// Every primitive, in installation order.
    pub const ALL: [Builtin; 12] = [
        Builtin::List,
        Builtin::Head,
        Builtin::Tail,
        Builtin::Eval,
        Builtin::Join,
        Builtin::Lambda,
        Builtin::Def,
        Builtin::Put,
        Builtin::Add,
        Builtin::Sub,
        Builtin::Mul,
        Builtin::Div,
    ];

    /// The symbol this primitive is bound to.
    pub fn name(self) -> &'static str {
        match self {
            Builtin::List => "list",
            Builtin::Head => "head",
            Builtin::Tail => "tail",
            Builtin::Eval => "eval",
            Builtin::Join => "join",
            Builtin::Lambda => "\\",
            Builtin::Def => "def",
            Builtin::Put => "=",
            Builtin::Add => "+",
            Builtin::Sub => "-",
            Builtin::Mul => "*",
            Builtin::Div => "/",
        }
    }
}

impl fmt::Display for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Install every builtin into the given frame.
pub fn install(env: &EnvRef) {
    let mut frame = env.borrow_mut();
    for builtin in Builtin::ALL {
        frame.put(builtin.name(), Value::Builtin(builtin));
    }
}

/// Create a fresh root environment with the builtin library installed.
pub fn global_env() -> EnvRef {
    let env = EnvRef::new(Env::new());
    install(&env);
    env
}

/// Dispatch a primitive on already-evaluated arguments.
pub(crate) fn dispatch(env: &EnvRef, builtin: Builtin, args: Vec<Value>) -> Value {
    match builtin {
        Builtin::List => builtin_list(args),
        Builtin::Head => builtin_head(args),
        Builtin::Tail => builtin_tail(args),
        Builtin::Eval => builtin_eval(env, args),
        Builtin::Join => builtin_join(args),
        Builtin::Lambda => builtin_lambda(args),
        Builtin::Def => builtin_var(env, args, Target::Root),
        Builtin::Put => builtin_var(env, args, Target::Local),
        Builtin::Add | Builtin::Sub | Builtin::Mul | Builtin::Div => builtin_op(builtin, args),
    }
}

/// Where a binding form writes.
enum Target {
    Root,
    Local,
}

/// `list` retags its argument list as a Q-expression.
fn builtin_list(args: Vec<Value>) -> Value {
    Value::qexpr(args)
}

fn builtin_head(mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return errors::wrong_arg_count("head", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(items) => match items.into_iter().next() {
            Some(first) => Value::qexpr(vec![first]),
            None => errors::empty_argument("head", 0),
        },
        other => errors::wrong_type("head", 0, other.type_name(), "Q-Expression"),
    }
}

fn builtin_tail(mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return errors::wrong_arg_count("tail", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(items) => {
            if items.is_empty() {
                return errors::empty_argument("tail", 0);
            }
            Value::qexpr(items.into_iter().skip(1).collect())
        }
        other => errors::wrong_type("tail", 0, other.type_name(), "Q-Expression"),
    }
}

/// `eval` retags a Q-expression as an S-expression and reduces it.
fn builtin_eval(env: &EnvRef, mut args: Vec<Value>) -> Value {
    if args.len() != 1 {
        return errors::wrong_arg_count("eval", args.len(), 1);
    }
    match args.remove(0) {
        Value::QExpr(items) => interpreter::eval(env, Value::SExpr(items)),
        other => errors::wrong_type("eval", 0, other.type_name(), "Q-Expression"),
    }
}

fn builtin_join(args: Vec<Value>) -> Value {
    for (index, arg) in args.iter().enumerate() {
        if !matches!(arg, Value::QExpr(_)) {
            return errors::wrong_type("join", index, arg.type_name(), "Q-Expression");
        }
    }

    let mut joined = Vec::new();
    for arg in args {
        if let Value::QExpr(items) = arg {
            joined.extend(items);
        }
    }
    Value::qexpr(joined)
}

/// `\` constructs a lambda. Formals must be a Q-expression of symbols;
/// that is enforced here, at construction time, not at call time.
fn builtin_lambda(args: Vec<Value>) -> Value {
    let [formals_arg, body_arg]: [Value; 2] = match args.try_into() {
        Ok(pair) => pair,
        Err(args) => return errors::wrong_arg_count("\\", args.len(), 2),
    };

    let formal_items = match formals_arg {
        Value::QExpr(items) => items,
        other => return errors::wrong_type("\\", 0, other.type_name(), "Q-Expression"),
    };
    let body = match body_arg {
        Value::QExpr(items) => items,
        other => return errors::wrong_type("\\", 1, other.type_name(), "Q-Expression"),
    };

    let mut formals = Vec::with_capacity(formal_items.len());
    for item in formal_items {
        match item {
            Value::Sym(name) => formals.push(name),
            other => return errors::non_symbol_formal(other.type_name()),
        }
    }

    Value::lambda(formals, body)
}

/// Shared body of `def` (root frame) and `=` (calling frame).
fn builtin_var(env: &EnvRef, args: Vec<Value>, target: Target) -> Value {
    let func = match target {
        Target::Root => "def",
        Target::Local => "=",
    };

    let mut args = args.into_iter();
    let Some(names_arg) = args.next() else {
        return errors::wrong_arg_count(func, 0, 2);
    };
    let name_items = match names_arg {
        Value::QExpr(items) => items,
        other => return errors::wrong_type(func, 0, other.type_name(), "Q-Expression"),
    };

    let mut names = Vec::with_capacity(name_items.len());
    for item in name_items {
        match item {
            Value::Sym(name) => names.push(name),
            other => return errors::non_symbol_name(func, other.type_name()),
        }
    }

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return errors::names_values_mismatch(func, values.len(), names.len());
    }

    let mut frame = env.borrow_mut();
    for (name, value) in names.into_iter().zip(values) {
        match target {
            Target::Root => frame.def(name, value),
            Target::Local => frame.put(name, value),
        }
    }
    Value::unit()
}

/// Arithmetic fold. All arguments must be numbers; `-` with a single
/// argument negates; division by zero and i64 overflow surface as error
/// values and stop the fold.
fn builtin_op(op: Builtin, args: Vec<Value>) -> Value {
    let func = op.name();

    let mut operands = Vec::with_capacity(args.len());
    for (index, arg) in args.into_iter().enumerate() {
        match arg {
            Value::Num(n) => operands.push(n),
            other => return errors::wrong_type(func, index, other.type_name(), "Number"),
        }
    }

    let mut operands = operands.into_iter();
    let Some(mut acc) = operands.next() else {
        return errors::wrong_arg_count(func, 0, 1);
    };

    if op == Builtin::Sub && operands.as_slice().is_empty() {
        return match acc.checked_neg() {
            Some(negated) => Value::num(negated),
            None => errors::integer_overflow(func),
        };
    }

    for operand in operands {
        let folded = match op {
            Builtin::Add => acc.checked_add(operand),
            Builtin::Sub => acc.checked_sub(operand),
            Builtin::Mul => acc.checked_mul(operand),
            // Div; dispatch routes nothing else here.
            _ => {
                if operand == 0 {
                    return errors::division_by_zero();
                }
                acc.checked_div(operand)
            }
        };
        match folded {
            Some(next) => acc = next,
            None => return errors::integer_overflow(func),
        }
    }

    Value::num(acc)
}
