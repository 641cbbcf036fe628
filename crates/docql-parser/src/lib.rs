//! Lexing, parsing, and printing for GraphQL query documents.
//!
//! The pipeline is [`tokenize`] → [`parse`] → [`ast::Document`], with
//! [`print`] rendering a document back to text that re-parses to a
//! structurally equal document. Numeric literals keep their written shape
//! end to end, so `1e6` never comes back as `1000000`.

pub mod ast;
mod document_error;
mod lex_error;
mod lexer;
mod numeric_literal;
mod parse_error;
mod parser;
pub mod print;
mod source_position;
mod source_span;
pub mod token;

pub use document_error::DocumentError;
pub use lex_error::LexError;
pub use lexer::tokenize;
pub use numeric_literal::Exponent;
pub use numeric_literal::NumericLiteral;
pub use parse_error::ParseError;
pub use parser::Parser;
pub use parser::parse;
pub use parser::parse_type;
pub use print::Printer;
pub use print::Render;
pub use source_position::SourcePosition;
pub use source_span::SourceSpan;

#[cfg(test)]
mod tests;
