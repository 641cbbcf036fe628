use crate::SourceSpan;
use crate::token::TokenKind;

/// A token with its raw source text and location.
///
/// `lexeme` is the exact source slice the token was lexed from, quotes and
/// escapes included for strings. Decoded values live in [`TokenKind`].
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,

    /// The raw source text of this token. Empty for the end-of-input token.
    pub lexeme: String,

    pub span: SourceSpan,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// The end-of-input sentinel token.
    pub fn eof() -> Self {
        Self {
            kind: TokenKind::Eof,
            lexeme: String::new(),
            span: SourceSpan::eof(),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.kind.is_eof() {
            write!(f, "end of input")
        } else {
            write!(f, "{} at {}", self.kind.description(), self.span)
        }
    }
}
