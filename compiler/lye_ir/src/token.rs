//! Lexer output tokens.
//!
//! Number and symbol tokens keep their raw lexeme text: numeric range
//! checking happens in the reader, where an out-of-range literal becomes
//! an error *value* rather than a lex failure.

use std::fmt;

use crate::Span;

/// Kind of a lexed token, carrying the lexeme text where it matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// Integer literal text, e.g. `-42`.
    Number(String),
    /// Symbol text, e.g. `head` or `+`.
    Symbol(String),
    /// Unrecognized input, kept for error reporting.
    Error(String),
    /// End of input.
    Eof,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::LParen => write!(f, "'('"),
            TokenKind::RParen => write!(f, "')'"),
            TokenKind::LBrace => write!(f, "'{{'"),
            TokenKind::RBrace => write!(f, "'}}'"),
            TokenKind::Number(text) | TokenKind::Symbol(text) | TokenKind::Error(text) => {
                write!(f, "'{text}'")
            }
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}

/// A token with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Create a new token.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}
