//! Lexer for Lye using logos.
//!
//! Produces a flat `Vec<Token>` for the parser. Unrecognized input is kept
//! as `TokenKind::Error` tokens rather than failing the whole lex, so the
//! parser can report the offending text with its location.

use logos::Logos;
use lye_ir::{Span, Token, TokenKind};

/// Raw token from logos (before carrying lexeme text over).
///
/// The symbol class is the original interpreter's: identifiers and
/// operator characters share one token, so `+` and `head` both lex as
/// symbols. A leading `-` directly before digits lexes as a number.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[regex(r";[^\n]*")]
    LineComment,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,

    // Number wins the same-length tie against Symbol (digits are legal
    // symbol characters too).
    #[regex(r"-?[0-9]+", priority = 10)]
    Number,

    #[regex(r"[a-zA-Z0-9_+\-*/\\=<>!&]+")]
    Symbol,
}

/// Lex source text into tokens.
///
/// Always succeeds: bad input becomes `TokenKind::Error` tokens. A final
/// `TokenKind::Eof` token is appended so the parser never runs off the end.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = Span::from_range(lexer.span());
        let slice = lexer.slice();

        let kind = match result {
            Ok(RawToken::LineComment) => continue,
            Ok(RawToken::LParen) => TokenKind::LParen,
            Ok(RawToken::RParen) => TokenKind::RParen,
            Ok(RawToken::LBrace) => TokenKind::LBrace,
            Ok(RawToken::RBrace) => TokenKind::RBrace,
            Ok(RawToken::Number) => TokenKind::Number(slice.to_string()),
            Ok(RawToken::Symbol) => TokenKind::Symbol(slice.to_string()),
            Err(()) => TokenKind::Error(slice.to_string()),
        };
        tokens.push(Token::new(kind, span));
    }

    let eof_pos = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof_pos)));

    tokens
}
