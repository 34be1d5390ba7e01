//! The tagged parse tree handed to the reader.
//!
//! The reader contract is deliberately loose: a node carries a `tag`
//! string (matched by substring), literal `contents` for leaves, and an
//! ordered list of children. Branch nodes keep their delimiter tokens as
//! `char`-tagged children; the reader skips those. This mirrors the shape
//! of the grammar-engine output the interpreter was originally written
//! against, so the evaluator stays decoupled from any one parser.

use crate::Span;

/// Tag of the root node produced for a whole input.
pub const ROOT_TAG: &str = ">";

/// Node of the concrete syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    /// Node tag, e.g. `">"`, `"number"`, `"symbol"`, `"sexpr"`, `"qexpr"`,
    /// `"char"` for delimiter tokens.
    pub tag: String,
    /// Literal text for leaf nodes; empty for branches.
    pub contents: String,
    /// Source location of this node.
    pub span: Span,
    /// Ordered child nodes.
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a leaf node with literal contents.
    #[inline]
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            tag: tag.into(),
            contents: contents.into(),
            span,
            children: Vec::new(),
        }
    }

    /// Create an empty branch node.
    #[inline]
    pub fn branch(tag: impl Into<String>, span: Span) -> Self {
        SyntaxNode {
            tag: tag.into(),
            contents: String::new(),
            span,
            children: Vec::new(),
        }
    }

    /// Append a child, widening this node's span to cover it.
    pub fn push(&mut self, child: SyntaxNode) {
        self.span = self.span.merge(child.span);
        self.children.push(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_widens_span() {
        let mut node = SyntaxNode::branch("sexpr", Span::point(0));
        node.push(SyntaxNode::leaf("number", "1", Span::new(1, 2)));
        node.push(SyntaxNode::leaf("number", "23", Span::new(3, 5)));
        assert_eq!(node.span, Span::new(0, 5));
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn leaf_has_no_children() {
        let leaf = SyntaxNode::leaf("symbol", "head", Span::new(0, 4));
        assert!(leaf.children.is_empty());
        assert_eq!(leaf.contents, "head");
    }
}
