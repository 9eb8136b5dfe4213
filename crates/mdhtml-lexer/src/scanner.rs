use crate::token::{is_special, Span, Token, FORCED_BREAKS};
use crate::LexerError;

/// Markdown source scanner.
///
/// Splits the source into tokens in a single pass over its characters.
/// A token ends wherever the specialness of adjacent characters changes,
/// after every line break, and before each of `# [ ( ! \n \r`. Runs of one
/// class therefore stay together, which is how `**`, `__` and `` ``` ``
/// come out as single tokens.
///
/// - `Vec<char>` source for index-based navigation
/// - Position recorded where the boundary opening each token fires
/// - Buffers holding `\r` are dropped, which absorbs CRLF line endings
pub struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,
    tokens: Vec<Token>,
    buffer: String,
    start: Span,
}

impl Scanner {
    /// Create a new scanner for the given source.
    pub fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 1,
            tokens: Vec::new(),
            buffer: String::new(),
            start: Span::new(0, 0, 1, 1),
        }
    }

    /// Tokenize the entire source into a vector of tokens ending with the
    /// `"\n"` sentinel. Empty input is rejected.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        if source.is_empty() {
            return Err(LexerError {
                message: "empty input".into(),
                line: 1,
                column: 1,
            });
        }

        let mut scanner = Scanner::new(source);
        scanner.scan_tokens();
        log::debug!(
            "tokenized {} characters into {} tokens",
            scanner.chars.len(),
            scanner.tokens.len()
        );
        Ok(scanner.tokens)
    }

    /// Scan all tokens from the source.
    fn scan_tokens(&mut self) {
        let mut prev: Option<char> = None;

        while !self.is_at_end() {
            let c = self.peek();

            if let Some(p) = prev {
                if Self::is_boundary(p, c) {
                    self.flush();
                    self.start = Span::new(self.pos, self.pos, self.line, self.column);
                }
            }

            // Whitespace directly after `#` is consumed but never buffered
            if prev == Some('#') && c.is_whitespace() {
                self.advance();
            } else {
                self.push(c);
            }

            prev = Some(c);
        }

        self.flush();

        let sentinel = Span::new(self.pos, self.pos, self.line, self.column);
        self.tokens.push(Token::new("\n", sentinel));
    }

    /// A new token starts before `current` when the previous character was a
    /// line break, the two differ in specialness, or `current` always forces one.
    fn is_boundary(prev: char, current: char) -> bool {
        prev == '\n'
            || prev == '\r'
            || is_special(prev) != is_special(current)
            || FORCED_BREAKS.contains(&current)
    }

    // --- Buffer ---

    /// Append the current character to the open token and consume it.
    fn push(&mut self, c: char) {
        self.buffer.push(c);
        self.advance();
    }

    /// Close the open token, emitting it unless it is empty or carries a `\r`.
    fn flush(&mut self) {
        let text = std::mem::take(&mut self.buffer);
        if text.is_empty() {
            return;
        }
        if text.contains('\r') {
            log::trace!(
                "dropping carriage return at line {}, column {}",
                self.start.line,
                self.start.column
            );
            return;
        }

        let span = Span::new(self.start.start, self.pos, self.start.line, self.start.column);
        self.tokens.push(Token::new(text, span));
    }

    // --- Helpers ---

    fn peek(&self) -> char {
        self.chars[self.pos]
    }

    fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        if self.chars[self.pos] == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.pos += 1;
    }

    fn is_at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }
}
