//! mdhtml Lexer
//!
//! Tokenizes Markdown source into a flat stream of positioned tokens.
//! A token is either a structural literal built from the special characters
//! (see [`token::SPECIAL_CHARS`]) or an opaque run of ordinary text. Every
//! stream ends with a synthetic `"\n"` sentinel.
//!
//! # Example
//!
//! ```
//! use mdhtml_lexer::Scanner;
//!
//! let tokens = Scanner::tokenize("# Hi").unwrap();
//! let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
//! assert_eq!(texts, vec!["#", "Hi", "\n"]);
//! ```

pub mod scanner;
pub mod token;

pub use scanner::Scanner;
pub use token::{is_special, Span, Token};

/// Lexer error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
