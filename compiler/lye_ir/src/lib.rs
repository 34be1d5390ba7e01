//! Lye IR - shared types for the Lye interpreter
//!
//! This crate contains the data structures that flow between the
//! pipeline stages:
//! - `Span` for source locations
//! - `Token` / `TokenKind` for lexer output
//! - `SyntaxNode` for the tagged parse tree the reader consumes
//!
//! The evaluator never sees raw text: the parser hands it a tree of
//! tagged nodes, and everything downstream works on that tree.

mod span;
mod token;
mod tree;

pub use span::Span;
pub use token::{Token, TokenKind};
pub use tree::{SyntaxNode, ROOT_TAG};
