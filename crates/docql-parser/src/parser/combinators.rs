//! The reusable backtracking substrate underneath the grammar.
//!
//! Contracts:
//! - `expect_*` consumes the current token when it matches and otherwise
//!   fails without consuming;
//! - `optional` runs a rule and, on any parse failure, rewinds the cursor
//!   and reports absence instead of propagating;
//! - `many` repeats a rule until it fails (rewinding the failed attempt) or
//!   an optional limit is reached, and never fails itself;
//! - `some` requires at least one success, propagating the first failure;
//! - `one_of` tries named alternatives in order, rewinding between attempts,
//!   and combines their names into one error when all fail;
//! - `bracket` consumes a delimiter pair around a rule, enforcing the
//!   nesting bound.

use crate::ParseError;
use crate::SourceSpan;
use crate::parser::Parser;
use crate::token::Punct;
use crate::token::Token;
use crate::token::TokenKind;

/// A named grammar rule usable as a `one_of` alternative.
pub(crate) type Rule<T> = fn(&mut Parser) -> Result<T, ParseError>;

impl Parser {
    // =========================================================================
    // Cursor primitives
    // =========================================================================

    /// The current (unconsumed) token. The end-of-input token is never
    /// consumed, so this is always in bounds.
    pub(crate) fn current(&self) -> &Token {
        &self.tokens[self.index.min(self.tokens.len() - 1)]
    }

    pub(crate) fn current_span(&self) -> SourceSpan {
        self.current().span
    }

    /// Consumes and returns the current token. The end-of-input token is
    /// returned without advancing.
    fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if !token.kind.is_eof() {
            self.index += 1;
        }
        token
    }

    /// Consumes the current token and returns its kind. Used by value
    /// parsing after the kind has already been matched.
    pub(crate) fn consume_kind(&mut self) -> TokenKind {
        self.advance().kind
    }

    fn mark(&self) -> usize {
        self.index
    }

    fn rewind(&mut self, mark: usize) {
        self.index = mark;
    }

    /// Returns `true` once only the end-of-input token remains.
    pub(crate) fn at_eof(&self) -> bool {
        self.current().kind.is_eof()
    }

    // =========================================================================
    // Expectations
    // =========================================================================

    /// Consumes a specific punctuator.
    pub(crate) fn expect_punct(&mut self, punct: Punct) -> Result<Token, ParseError> {
        match &self.current().kind {
            TokenKind::Punct(found) if *found == punct => Ok(self.advance()),
            _ => Err(ParseError::Expected {
                wanted: format!("`{punct}`"),
                found: self.current().clone(),
            }),
        }
    }

    /// Consumes any name token and returns its text.
    pub(crate) fn expect_name(&mut self) -> Result<String, ParseError> {
        match &self.current().kind {
            TokenKind::Name(_) => {
                let token = self.advance();
                match token.kind {
                    TokenKind::Name(name) => Ok(name),
                    _ => unreachable!("matched a name token"),
                }
            }
            _ => Err(ParseError::Unexpected {
                found: self.current().clone(),
            }),
        }
    }

    /// Consumes a name token with a specific text.
    pub(crate) fn expect_keyword(&mut self, keyword: &str) -> Result<(), ParseError> {
        match &self.current().kind {
            TokenKind::Name(name) if name == keyword => {
                self.advance();
                Ok(())
            }
            _ => Err(ParseError::Expected {
                wanted: format!("`{keyword}`"),
                found: self.current().clone(),
            }),
        }
    }

    /// Fails unless only the end-of-input token remains.
    pub(crate) fn expect_eof(&mut self) -> Result<(), ParseError> {
        if self.at_eof() {
            Ok(())
        } else {
            Err(ParseError::Unexpected {
                found: self.current().clone(),
            })
        }
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Runs `rule`; on failure, rewinds the cursor and returns `None`.
    pub(crate) fn optional<T>(
        &mut self,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Option<T> {
        let mark = self.mark();
        match rule(self) {
            Ok(value) => Some(value),
            Err(_) => {
                self.rewind(mark);
                None
            }
        }
    }

    /// Repeats `rule` until it fails or `limit` is reached. The failing
    /// attempt is rewound; `many` itself never fails.
    pub(crate) fn many<T>(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> Result<T, ParseError>,
        limit: Option<usize>,
    ) -> Vec<T> {
        let mut items = Vec::new();
        loop {
            if limit.is_some_and(|limit| items.len() >= limit) {
                break;
            }
            let mark = self.mark();
            match rule(self) {
                Ok(value) => items.push(value),
                Err(_) => {
                    self.rewind(mark);
                    break;
                }
            }
        }
        items
    }

    /// Like `many`, but requires at least one success, propagating the
    /// first failure.
    pub(crate) fn some<T>(
        &mut self,
        mut rule: impl FnMut(&mut Self) -> Result<T, ParseError>,
    ) -> Result<Vec<T>, ParseError> {
        let mut items = vec![rule(self)?];
        loop {
            let mark = self.mark();
            match rule(self) {
                Ok(value) => items.push(value),
                Err(_) => {
                    self.rewind(mark);
                    break;
                }
            }
        }
        Ok(items)
    }

    /// Tries each named alternative in order, rewinding between attempts.
    /// When every alternative fails, the names combine into one error at
    /// the original cursor position.
    pub(crate) fn one_of<T>(&mut self, rules: &[(&str, Rule<T>)]) -> Result<T, ParseError> {
        let mark = self.mark();
        for (_, rule) in rules {
            match rule(self) {
                Ok(value) => return Ok(value),
                Err(_) => self.rewind(mark),
            }
        }
        let wanted = rules
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<_>>()
            .join(", ");
        Err(ParseError::Expected {
            wanted: format!("one of {wanted}"),
            found: self.current().clone(),
        })
    }

    /// Consumes `open`, runs `rule` one nesting level deeper, consumes
    /// `close`. Exceeding the configured nesting bound fails with
    /// [`ParseError::TooDeep`] before `rule` runs.
    pub(crate) fn bracket<T>(
        &mut self,
        open: Punct,
        close: Punct,
        rule: impl FnOnce(&mut Self) -> Result<T, ParseError>,
    ) -> Result<T, ParseError> {
        let open_token = self.expect_punct(open)?;
        if self.depth >= self.max_depth {
            return Err(ParseError::TooDeep {
                span: open_token.span,
            });
        }
        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        let value = result?;
        self.expect_punct(close)?;
        Ok(value)
    }
}
