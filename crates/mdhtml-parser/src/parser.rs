//! Document parser for the Markdown subset.
//!
//! Consumes the flat token stream from `mdhtml-lexer` and builds a `Document`
//! by recursive descent. The cursor only moves forward. Structural tokens are
//! matched by their literal text with `accept` and `expect`.
//!
//! Grammar:
//!
//! ```text
//! document  := block*
//! block     := '#' '#'* inline('\n')
//!            | '```' any* '```'
//!            | '!' '[' any ']' '(' any ')'
//!            | '\n'
//!            | inline('\n')
//! inline(B) := ( italic | bold | code | link | any )*   -- until a token in B
//! italic    := ('*' | '_')   inline(B + '*' '_')   ('*' | '_')
//! bold      := ('**' | '__') inline(B + '**' '__') ('**' | '__')
//! code      := '`' any* '`'
//! link      := '[' any ']' '(' any ')'
//! ```

use crate::ast::{Document, Node};
use crate::{Found, ParseError};
use mdhtml_lexer::{Span, Token};

/// The set of literals that end the current inline level.
///
/// Each recursion gets its own copy extended with the new delimiters, so a
/// nested span never changes what terminates its parent or its siblings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounds(Vec<&'static str>);

impl Bounds {
    /// Bounds for a block's inline content: stop at the end of the line.
    pub fn line() -> Self {
        Self(vec!["\n"])
    }

    /// A copy of these bounds with `extra` added.
    pub fn with(&self, extra: &[&'static str]) -> Self {
        let mut literals = self.0.clone();
        for literal in extra {
            if !literals.contains(literal) {
                literals.push(*literal);
            }
        }
        Self(literals)
    }

    pub fn contains(&self, text: &str) -> bool {
        self.0.iter().any(|literal| *literal == text)
    }
}

/// Markdown document parser.
///
/// The last token of the stream is treated as the end-of-input sentinel and
/// is never consumed.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Create a new parser for the given tokens.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.is_empty() {
            tokens.push(Token::new("\n", Span::new(0, 0, 1, 1)));
        }
        Self { tokens, pos: 0 }
    }

    /// Parse source text into a document AST.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        let tokens = mdhtml_lexer::Scanner::tokenize(source)?;
        let mut parser = Parser::new(tokens);
        parser.parse_document()
    }

    /// Parse a full document.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let mut nodes = Vec::new();

        while !self.is_at_end() {
            if let Some(node) = self.parse_block()? {
                nodes.push(node);
            }
        }

        log::debug!("parsed {} blocks from {} tokens", nodes.len(), self.tokens.len());
        Ok(Document { nodes })
    }

    // =========================================================================
    // Blocks
    // =========================================================================

    /// Parse one block, dispatching on its first token. A blank line yields `None`.
    fn parse_block(&mut self) -> Result<Option<Node>, ParseError> {
        let span = self.peek().span;
        log::trace!("block at line {}, column {}", span.line, span.column);

        if self.accept("#") {
            self.parse_header().map(Some)
        } else if self.accept("```") {
            Ok(Some(Node::CodeBlock(self.parse_verbatim("```")?)))
        } else if self.accept("!") {
            self.parse_image().map(Some)
        } else if self.accept("\n") {
            Ok(None)
        } else {
            Ok(Some(Node::Paragraph(self.parse_inline(&Bounds::line())?)))
        }
    }

    /// Parse a header after its first `#`.
    fn parse_header(&mut self) -> Result<Node, ParseError> {
        let mut level = 1;
        while self.accept("#") {
            level += 1;
        }

        let children = self.parse_inline(&Bounds::line())?;
        Ok(Node::Header { level, children })
    }

    /// Parse `[alt](url)` after the leading `!`.
    fn parse_image(&mut self) -> Result<Node, ParseError> {
        self.expect("[")?;
        let (alt, url) = self.parse_target("alt text")?;
        Ok(Node::Image { alt, url })
    }

    // =========================================================================
    // Inline content
    // =========================================================================

    /// Parse inline nodes until the next token is one of `bounds`.
    fn parse_inline(&mut self, bounds: &Bounds) -> Result<Vec<Node>, ParseError> {
        let mut children = Vec::new();

        while !bounds.contains(&self.peek().text) {
            let node = if self.accept("_") || self.accept("*") {
                self.parse_italic(bounds)?
            } else if self.accept("__") || self.accept("**") {
                self.parse_bold(bounds)?
            } else if self.accept("`") {
                Node::Code(self.parse_verbatim("`")?)
            } else if self.accept("[") {
                let (text, url) = self.parse_target("link text")?;
                Node::Link { text, url }
            } else {
                Node::Text(self.take("text")?)
            };
            children.push(node);
        }

        Ok(children)
    }

    /// Either `*` or `_` closes the span, whichever opened it.
    fn parse_italic(&mut self, bounds: &Bounds) -> Result<Node, ParseError> {
        let children = self.parse_inline(&bounds.with(&["*", "_"]))?;
        if !self.accept("*") {
            self.expect("_")?;
        }
        Ok(Node::Italic(children))
    }

    /// Either `**` or `__` closes the span, whichever opened it.
    fn parse_bold(&mut self, bounds: &Bounds) -> Result<Node, ParseError> {
        let children = self.parse_inline(&bounds.with(&["**", "__"]))?;
        if !self.accept("**") {
            self.expect("__")?;
        }
        Ok(Node::Bold(children))
    }

    /// Concatenate token text up to and including the closing `fence`.
    fn parse_verbatim(&mut self, fence: &str) -> Result<String, ParseError> {
        let mut raw = String::new();
        while !self.accept(fence) {
            if self.is_at_end() {
                return Err(self.error(fence));
            }
            raw.push_str(&self.take(fence)?);
        }
        Ok(raw)
    }

    /// Parse `text](url)` after an opening `[`. Text and url are one token each.
    fn parse_target(&mut self, label: &str) -> Result<(String, String), ParseError> {
        let text = self.take(label)?;
        self.expect("]")?;
        self.expect("(")?;
        let url = self.take("url")?;
        self.expect(")")?;
        Ok((text, url))
    }

    // =========================================================================
    // Token navigation helpers
    // =========================================================================

    fn peek(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Consume the next token if its text is `literal`.
    fn accept(&mut self, literal: &str) -> bool {
        if !self.is_at_end() && self.peek().text == literal {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume `literal` or fail with a syntax error at the current token.
    fn expect(&mut self, literal: &str) -> Result<(), ParseError> {
        if self.accept(literal) {
            Ok(())
        } else {
            Err(self.error(literal))
        }
    }

    /// Consume any one token and return its text. Fails at the sentinel.
    fn take(&mut self, expected: &str) -> Result<String, ParseError> {
        if self.is_at_end() {
            return Err(self.error(expected));
        }
        let text = self.peek().text.clone();
        self.pos += 1;
        Ok(text)
    }

    fn is_at_end(&self) -> bool {
        self.pos + 1 >= self.tokens.len()
    }

    fn error(&self, expected: &str) -> ParseError {
        let token = self.peek();
        let found = if self.is_at_end() {
            Found::EndOfInput
        } else if token.is_structural() {
            Found::Literal(token.text.clone())
        } else {
            Found::Text
        };
        ParseError::Syntax {
            expected: expected.to_string(),
            found,
            line: token.span.line,
            column: token.span.column,
        }
    }
}
