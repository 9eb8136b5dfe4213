//! mdhtml Parser
//!
//! Parses the lexer's token stream into a `Document` AST using recursive
//! descent over a fixed grammar: headers, single-line paragraphs, fenced code
//! blocks and images at block level; emphasis, strong emphasis, code spans
//! and links inline.
//!
//! Parsing is all-or-nothing. The first syntax error aborts the parse and is
//! returned as a [`ParseError`]; there is no recovery.

pub mod ast;
pub mod parser;

use std::fmt;

pub use ast::{Document, Node};
pub use mdhtml_lexer::LexerError;
pub use parser::{Bounds, Parser};

/// What the parser found where it expected a specific literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    /// A structural token, reported verbatim.
    Literal(String),
    /// A content token. Its text is never echoed back in diagnostics.
    Text,
    /// The trailing sentinel at the end of the stream.
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Literal(text) => write!(f, "`{text}`"),
            Found::Text => f.write_str("text"),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// Parser error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error("Syntax error at line {line}, column {column}: expected `{expected}`, got {found}")]
    Syntax {
        expected: String,
        found: Found,
        line: usize,
        column: usize,
    },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::Lexer(e) => e.line,
            ParseError::Syntax { line, .. } => *line,
        }
    }

    pub fn column(&self) -> usize {
        match self {
            ParseError::Lexer(e) => e.column,
            ParseError::Syntax { column, .. } => *column,
        }
    }
}
