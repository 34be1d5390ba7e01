//! Reader: converts the tagged parse tree into a `Value` tree.
//!
//! Tags are matched by substring, per the input contract: any node whose
//! tag mentions `number` or `symbol` is a leaf; `qexpr` nodes become
//! Q-expressions; everything else (including the root) becomes an
//! S-expression. Delimiter children and raw regex-match artifacts are
//! skipped, never appended.

use lye_ir::SyntaxNode;

use crate::errors;
use crate::value::Value;

/// Read one parse-tree node into a value.
pub fn read(node: &SyntaxNode) -> Value {
    if node.tag.contains("number") {
        return read_number(node);
    }
    if node.tag.contains("symbol") {
        return Value::sym(node.contents.clone());
    }

    let mut children = Vec::new();
    for child in &node.children {
        if matches!(child.contents.as_str(), "(" | ")" | "{" | "}") {
            continue;
        }
        if child.tag == "regex" {
            continue;
        }
        children.push(read(child));
    }

    if node.tag.contains("qexpr") {
        Value::qexpr(children)
    } else {
        Value::sexpr(children)
    }
}

/// Out-of-range or malformed literals become error values, not aborts.
fn read_number(node: &SyntaxNode) -> Value {
    match node.contents.parse::<i64>() {
        Ok(n) => Value::num(n),
        Err(_) => errors::invalid_number(),
    }
}
