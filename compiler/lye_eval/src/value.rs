//! Runtime values for the Lye interpreter.
//!
//! `Value` is a closed tagged union. Expression children are owned
//! exclusively by their parent — cloning a value deep-copies the whole
//! tree, and dropping it releases the tree. A lambda owns its environment
//! frame the same way: each clone gets an independent frame, so two
//! lambda values never share bindings (the non-owning parent link is the
//! one shared reference, set at call time).

use std::fmt;

use crate::builtins::Builtin;
use crate::environment::Env;

/// Runtime value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed integer.
    Num(i64),
    /// Error carrying its diagnostic message; a first-class value.
    Err(String),
    /// Symbol to be resolved against an environment.
    Sym(String),
    /// S-expression: evaluated by applying its head to the rest.
    SExpr(Vec<Value>),
    /// Q-expression: inert data, evaluated only through `eval`.
    QExpr(Vec<Value>),
    /// Builtin function.
    Builtin(Builtin),
    /// User-defined function.
    Lambda(Box<LambdaVal>),
}

/// A user-defined function: formal parameters, body, and the environment
/// frame that accumulates bound arguments (growing under partial
/// application).
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaVal {
    /// Unbound formal parameter names, in order.
    pub formals: Vec<String>,
    /// Body Q-expression children, evaluated as an S-expression on full
    /// application.
    pub body: Vec<Value>,
    /// The lambda's own frame. Parented to the *calling* environment when
    /// the call completes.
    pub env: Env,
}

impl Value {
    /// Create a number value.
    #[inline]
    pub fn num(n: i64) -> Self {
        Value::Num(n)
    }

    /// Create an error value.
    #[inline]
    pub fn err(message: impl Into<String>) -> Self {
        Value::Err(message.into())
    }

    /// Create a symbol value.
    #[inline]
    pub fn sym(name: impl Into<String>) -> Self {
        Value::Sym(name.into())
    }

    /// Create an S-expression value.
    #[inline]
    pub fn sexpr(children: Vec<Value>) -> Self {
        Value::SExpr(children)
    }

    /// Create a Q-expression value.
    #[inline]
    pub fn qexpr(children: Vec<Value>) -> Self {
        Value::QExpr(children)
    }

    /// Create a lambda with a fresh empty environment frame.
    #[inline]
    pub fn lambda(formals: Vec<String>, body: Vec<Value>) -> Self {
        Value::Lambda(Box::new(LambdaVal {
            formals,
            body,
            env: Env::new(),
        }))
    }

    /// The empty S-expression, used as the unit result of binding forms.
    #[inline]
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    /// Whether this value is an error.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self, Value::Err(_))
    }

    /// Type name used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Num(_) => "Number",
            Value::Err(_) => "Error",
            Value::Sym(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Builtin(_) | Value::Lambda(_) => "Function",
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: char, children: &[Value], close: char) -> fmt::Result {
    write!(f, "{open}")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{child}")?;
    }
    write!(f, "{close}")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Num(n) => write!(f, "{n}"),
            Value::Err(message) => write!(f, "Error: {message}"),
            Value::Sym(name) => write!(f, "{name}"),
            Value::SExpr(children) => write_seq(f, '(', children, ')'),
            Value::QExpr(children) => write_seq(f, '{', children, '}'),
            Value::Builtin(_) => write!(f, "<builtin>"),
            Value::Lambda(lambda) => {
                write!(f, "(\\ {{{}}} ", lambda.formals.join(" "))?;
                write_seq(f, '{', &lambda.body, '}')?;
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_number_and_symbol() {
        assert_eq!(Value::num(-42).to_string(), "-42");
        assert_eq!(Value::sym("head").to_string(), "head");
    }

    #[test]
    fn display_error_prefixes_message() {
        assert_eq!(Value::err("Division By Zero.").to_string(), "Error: Division By Zero.");
    }

    #[test]
    fn display_expressions() {
        let sexpr = Value::sexpr(vec![Value::sym("+"), Value::num(1), Value::num(2)]);
        assert_eq!(sexpr.to_string(), "(+ 1 2)");

        let qexpr = Value::qexpr(vec![Value::num(1), sexpr]);
        assert_eq!(qexpr.to_string(), "{1 (+ 1 2)}");

        assert_eq!(Value::unit().to_string(), "()");
        assert_eq!(Value::qexpr(Vec::new()).to_string(), "{}");
    }

    #[test]
    fn display_lambda() {
        let lambda = Value::lambda(
            vec!["a".into(), "b".into()],
            vec![Value::sym("+"), Value::sym("a"), Value::sym("b")],
        );
        assert_eq!(lambda.to_string(), "(\\ {a b} {+ a b})");
    }

    #[test]
    fn clone_gives_independent_lambda_frames() {
        let original = Value::lambda(vec!["x".into()], vec![Value::sym("x")]);
        let mut clone = original.clone();

        if let Value::Lambda(lambda) = &mut clone {
            lambda.env.put("bound", Value::num(1));
        }

        let Value::Lambda(original) = &original else {
            panic!("expected lambda");
        };
        assert_eq!(original.env.lookup("bound"), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(Value::num(0).type_name(), "Number");
        assert_eq!(Value::qexpr(Vec::new()).type_name(), "Q-Expression");
        assert_eq!(Value::lambda(Vec::new(), Vec::new()).type_name(), "Function");
        assert_eq!(Value::Builtin(Builtin::Head).type_name(), "Function");
    }
}
