//! Backtracking recursive-descent parser over a lexed token stream.
//!
//! The parser is a combinator substrate ([`combinators`]) specialized with
//! the document grammar ([`grammar`]). Backtracking works through an
//! explicit cursor index: failing combinators rewind the index and return
//! through `Result`, so no production needs unbounded lookahead and a
//! failed alternative never leaves the cursor advanced.
//!
//! The only recursion bound is the bracket-nesting depth counter, which
//! fails fast with [`ParseError::TooDeep`] instead of overflowing the call
//! stack on adversarial input like `[[[[[...`.

mod combinators;
mod grammar;

use crate::DocumentError;
use crate::ParseError;
use crate::ast::Document;
use crate::ast::TypeAnnotation;
use crate::token::Token;

/// Parses source text into a [`Document`].
///
/// # Example
///
/// ```rust
/// let document = docql_parser::parse("query Q { user { id name } }").unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub fn parse(source: &str) -> Result<Document, DocumentError> {
    let tokens = crate::tokenize(source)?;
    Ok(Parser::new(tokens).parse_document()?)
}

/// Parses a standalone type annotation such as `[User!]!`.
///
/// The annotation must span the whole input; trailing tokens are an error.
pub fn parse_type(source: &str) -> Result<TypeAnnotation, DocumentError> {
    let tokens = crate::tokenize(source)?;
    let mut parser = Parser::new(tokens);
    let annotation = parser.type_annotation()?;
    parser.expect_eof()?;
    Ok(annotation)
}

/// A backtracking parser over a fully lexed token stream.
pub struct Parser {
    /// The token stream. Always ends with the end-of-input token.
    tokens: Vec<Token>,

    /// Cursor into `tokens`. Combinators save and restore this index to
    /// backtrack.
    index: usize,

    /// Current bracket-nesting depth.
    depth: usize,

    /// Nesting bound enforced by `bracket`.
    max_depth: usize,
}

impl Parser {
    /// Default maximum bracket-nesting depth.
    ///
    /// Far beyond any realistic document (most nest fewer than 15 levels)
    /// while keeping deeply nested adversarial input from exhausting the
    /// call stack, even in debug builds with large frames.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().is_none_or(|token| !token.kind.is_eof()) {
            tokens.push(Token::eof());
        }
        Self {
            tokens,
            index: 0,
            depth: 0,
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Overrides the maximum bracket-nesting depth.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Runs the document production over the whole stream.
    pub fn parse_document(mut self) -> Result<Document, ParseError> {
        self.document()
    }
}
