/// A position in source text. `start`/`end` are character offsets,
/// `line`/`column` are 1-based and point at the first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(start: usize, end: usize, line: usize, column: usize) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }
}

/// Characters that make up structural Markdown punctuation.
pub const SPECIAL_CHARS: &[char] = &['_', '*', '`', '#', '[', ']', '(', ')', '!'];

/// Characters that always start a fresh token, even inside a run of the same class.
pub const FORCED_BREAKS: &[char] = &['#', '[', '(', '!', '\n', '\r'];

/// Check if a character is structural punctuation.
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(&c)
}

/// A token produced by the Markdown lexer.
///
/// The text is kept verbatim; the parser matches structural tokens by their
/// literal value (`"**"`, `"```"`, `"["`) rather than through a kind enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// True if the token is a run of special characters (`**`, `[`, `` ``` ``).
    /// Content tokens never start with a special character.
    pub fn is_structural(&self) -> bool {
        self.text.chars().next().is_some_and(is_special)
    }
}
