//! Parser for Lye.
//!
//! Turns the token stream into the tagged `SyntaxNode` tree the reader
//! consumes: a `>` root holding top-level expressions, `sexpr`/`qexpr`
//! branches that keep their delimiter tokens as `char` children, and
//! `number`/`symbol` leaves. The reader skips the delimiter children, so
//! the tree stays a faithful concrete syntax tree.

use lye_ir::{Span, SyntaxNode, Token, TokenKind, ROOT_TAG};
use thiserror::Error;

/// Parse failure with its source location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A closing delimiter with no matching opener.
    #[error("unexpected closing '{delim}' at {span}")]
    UnexpectedClosing { delim: char, span: Span },
    /// Input ended inside a group.
    #[error("unclosed '{delim}' opened at {span}")]
    Unclosed { delim: char, span: Span },
    /// Text the lexer could not make a token of.
    #[error("unrecognized input '{text}' at {span}")]
    Unrecognized { text: String, span: Span },
}

/// Lex and parse source text into a syntax tree.
pub fn parse(source: &str) -> Result<SyntaxNode, ParseError> {
    Parser::new(lye_lexer::lex(source)).parse_root()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Parser { tokens, pos: 0 }
    }

    /// Current token. The lexer always appends `Eof` and the parser never
    /// advances past it, so the index stays in bounds.
    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    fn parse_root(mut self) -> Result<SyntaxNode, ParseError> {
        let mut root = SyntaxNode::branch(ROOT_TAG, Span::point(0));
        while self.peek().kind != TokenKind::Eof {
            let expr = self.parse_expr()?;
            root.push(expr);
        }
        Ok(root)
    }

    fn parse_expr(&mut self) -> Result<SyntaxNode, ParseError> {
        let token = self.advance();
        match token.kind {
            TokenKind::Number(text) => Ok(SyntaxNode::leaf("number", text, token.span)),
            TokenKind::Symbol(text) => Ok(SyntaxNode::leaf("symbol", text, token.span)),
            TokenKind::LParen => self.parse_group("sexpr", '(', ')', token.span),
            TokenKind::LBrace => self.parse_group("qexpr", '{', '}', token.span),
            TokenKind::RParen => Err(ParseError::UnexpectedClosing {
                delim: ')',
                span: token.span,
            }),
            TokenKind::RBrace => Err(ParseError::UnexpectedClosing {
                delim: '}',
                span: token.span,
            }),
            TokenKind::Error(text) => Err(ParseError::Unrecognized {
                text,
                span: token.span,
            }),
            TokenKind::Eof => Err(ParseError::Unclosed {
                delim: '(',
                span: token.span,
            }),
        }
    }

    fn parse_group(
        &mut self,
        tag: &str,
        open: char,
        close: char,
        open_span: Span,
    ) -> Result<SyntaxNode, ParseError> {
        let mut node = SyntaxNode::branch(tag, open_span);
        node.push(SyntaxNode::leaf("char", open, open_span));

        loop {
            let token = self.peek();
            let closes = matches!(
                (&token.kind, close),
                (TokenKind::RParen, ')') | (TokenKind::RBrace, '}')
            );
            if closes {
                let closer = self.advance();
                node.push(SyntaxNode::leaf("char", close, closer.span));
                return Ok(node);
            }
            if token.kind == TokenKind::Eof {
                return Err(ParseError::Unclosed {
                    delim: open,
                    span: open_span,
                });
            }
            let child = self.parse_expr()?;
            node.push(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Children of a group without its delimiter tokens.
    fn inner(node: &SyntaxNode) -> Vec<&SyntaxNode> {
        node.children.iter().filter(|c| c.tag != "char").collect()
    }

    #[test]
    fn parse_flat_expression() {
        let root = parse("+ 1 2").unwrap();
        assert_eq!(root.tag, ROOT_TAG);
        let tags: Vec<&str> = root.children.iter().map(|c| c.tag.as_str()).collect();
        assert_eq!(tags, vec!["symbol", "number", "number"]);
        assert_eq!(root.children[0].contents, "+");
        assert_eq!(root.children[2].contents, "2");
    }

    #[test]
    fn parse_nested_groups() {
        let root = parse("(head {1 2 3})").unwrap();
        assert_eq!(root.children.len(), 1);

        let sexpr = &root.children[0];
        assert_eq!(sexpr.tag, "sexpr");
        // Delimiters are retained as children.
        assert_eq!(sexpr.children.first().map(|c| c.contents.as_str()), Some("("));
        assert_eq!(sexpr.children.last().map(|c| c.contents.as_str()), Some(")"));

        let exprs = inner(sexpr);
        assert_eq!(exprs.len(), 2);
        assert_eq!(exprs[0].tag, "symbol");
        assert_eq!(exprs[1].tag, "qexpr");
        assert_eq!(inner(exprs[1]).len(), 3);
    }

    #[test]
    fn parse_empty_input_gives_bare_root() {
        let root = parse("").unwrap();
        assert_eq!(root.tag, ROOT_TAG);
        assert!(root.children.is_empty());
    }

    #[test]
    fn parse_empty_groups() {
        let root = parse("() {}").unwrap();
        assert_eq!(root.children[0].tag, "sexpr");
        assert!(inner(&root.children[0]).is_empty());
        assert_eq!(root.children[1].tag, "qexpr");
        assert!(inner(&root.children[1]).is_empty());
    }

    #[test]
    fn unexpected_closing_paren() {
        let err = parse(") 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedClosing {
                delim: ')',
                span: Span::new(0, 1)
            }
        );
    }

    #[test]
    fn mismatched_closer_inside_group() {
        let err = parse("(1 }").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnexpectedClosing {
                delim: '}',
                span: Span::new(3, 4)
            }
        );
    }

    #[test]
    fn unclosed_group_reports_opening_span() {
        let err = parse("{1 2").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unclosed {
                delim: '{',
                span: Span::new(0, 1)
            }
        );
    }

    #[test]
    fn unrecognized_input_is_reported() {
        let err = parse("(+ 1 #)").unwrap_err();
        assert_eq!(
            err,
            ParseError::Unrecognized {
                text: "#".into(),
                span: Span::new(5, 6)
            }
        );
    }

    #[test]
    fn error_messages_name_the_location() {
        let err = parse("(1 2").unwrap_err();
        assert_eq!(err.to_string(), "unclosed '(' opened at 0..1");
    }
}
