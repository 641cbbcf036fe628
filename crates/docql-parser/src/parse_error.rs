use crate::SourceSpan;
use crate::token::Token;

/// An error produced while parsing a token stream into a document.
///
/// Parsing is fail-fast: no partial syntax tree is salvaged. Backtracking
/// combinators (`optional`, `many`, `one_of`) recover from these errors
/// internally by rewinding the cursor; an error that escapes the parser is
/// final.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The parser met a token that no active production could begin with.
    #[error("unexpected {found}")]
    Unexpected { found: Token },

    /// A production required a specific token and found something else.
    #[error("expected {wanted}, found {found}")]
    Expected { wanted: String, found: Token },

    /// A token was syntactically valid but semantically malformed, e.g. a
    /// fragment named `on`.
    #[error("{message} at {span}")]
    Illegal { message: String, span: SourceSpan },

    /// The configured maximum bracket-nesting depth was exceeded.
    #[error("nesting depth limit exceeded at {span}")]
    TooDeep { span: SourceSpan },
}
