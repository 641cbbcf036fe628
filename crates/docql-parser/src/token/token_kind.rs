use crate::NumericLiteral;
use crate::token::Punct;

/// The kind of a token, carrying the decoded value for literals.
///
/// String tokens store the decoded content (escape sequences applied, block
/// indentation stripped); the raw source text lives in the token's `lexeme`.
/// Number tokens store the decomposed [`NumericLiteral`] so that the written
/// shape of the literal survives into the syntax tree.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// A name or keyword: `[_A-Za-z][_0-9A-Za-z]*`.
    Name(String),

    /// A string literal's decoded content.
    String(String),

    /// An integer or float literal.
    Number(NumericLiteral),

    /// One of the closed punctuator set.
    Punct(Punct),

    /// End of input. Emitted exactly once, as the final token.
    Eof,
}

impl TokenKind {
    /// Returns `true` for the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// A short description of the token for error messages, e.g.
    /// ``name `user` `` or `` `{` ``.
    pub fn description(&self) -> String {
        match self {
            TokenKind::Name(name) => format!("name `{name}`"),
            TokenKind::String(_) => "string".to_string(),
            TokenKind::Number(literal) => format!("number `{literal}`"),
            TokenKind::Punct(punct) => format!("`{punct}`"),
            TokenKind::Eof => "end of input".to_string(),
        }
    }
}
