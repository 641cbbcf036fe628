//! Fail-fast lexer for query document source text.
//!
//! [`tokenize`] performs a single forward pass over the source's Unicode
//! scalar values with one-character/one-string lookahead and produces the
//! full token stream up front. The first malformed construct aborts the scan
//! with a [`LexError`] carrying a 1-based line/column; there is no error
//! recovery.
//!
//! Ignored source text (spaces, tabs, commas, the BOM, line terminators, and
//! `#` comments) produces no tokens. The stream always ends with exactly one
//! end-of-input token.

use crate::LexError;
use crate::NumericLiteral;
use crate::SourcePosition;
use crate::SourceSpan;
use crate::numeric_literal::Exponent;
use crate::token::Punct;
use crate::token::Token;
use crate::token::TokenKind;

/// Tokenizes `source` into the complete token stream.
///
/// # Example
///
/// ```rust
/// use docql_parser::token::TokenKind;
///
/// let tokens = docql_parser::tokenize("{ name }").unwrap();
/// assert_eq!(tokens.len(), 4); // `{`, `name`, `}`, end of input
/// assert!(matches!(tokens[3].kind, TokenKind::Eof));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).run()
}

struct Lexer<'src> {
    /// The full source text being lexed.
    source: &'src str,

    /// Current byte offset from the start of `source`. The remaining text
    /// is `&source[offset..]`.
    offset: usize,

    /// Current 1-based line number.
    line: usize,

    /// Current 1-based column, counting Unicode scalar values.
    col: usize,

    /// Whether the previous character was `\r`, so that `\r\n` advances the
    /// line exactly once.
    last_char_was_cr: bool,
}

impl<'src> Lexer<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            offset: 0,
            line: 1,
            col: 1,
            last_char_was_cr: false,
        }
    }

    // =========================================================================
    // Position and scanning helpers
    // =========================================================================

    fn remaining(&self) -> &'src str {
        &self.source[self.offset..]
    }

    fn position(&self) -> SourcePosition {
        SourcePosition::new(self.line, self.col)
    }

    fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Consumes the next character, updating line/column tracking.
    fn consume_char(&mut self) -> Option<char> {
        let ch = self.peek_char()?;
        if ch == '\n' {
            if self.last_char_was_cr {
                // The `\n` of a `\r\n` pair; the line already advanced.
                self.last_char_was_cr = false;
            } else {
                self.line += 1;
                self.col = 1;
            }
        } else if ch == '\r' {
            self.line += 1;
            self.col = 1;
            self.last_char_was_cr = true;
        } else {
            self.col += 1;
            self.last_char_was_cr = false;
        }
        self.offset += ch.len_utf8();
        Some(ch)
    }

    /// Creates a span from `start` to the current position.
    fn span_from(&self, start: SourcePosition) -> SourceSpan {
        SourceSpan::new(start, self.position())
    }

    // =========================================================================
    // Main loop
    // =========================================================================

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_ignored();

            let start = self.position();
            let Some(ch) = self.peek_char() else {
                tokens.push(Token::eof());
                return Ok(tokens);
            };

            let token = if let Some(punct) = single_punct(ch) {
                self.consume_char();
                Token::new(TokenKind::Punct(punct), punct.as_str(), self.span_from(start))
            } else if ch == '.' {
                self.lex_ellipsis(start)?
            } else if ch == '"' {
                self.lex_string(start)?
            } else if is_name_start(ch) {
                self.lex_name(start)
            } else if ch == '-' || ch.is_ascii_digit() {
                self.lex_number(start)?
            } else {
                return Err(LexError::new(
                    format!("Unexpected character `{ch}`"),
                    start,
                ));
            };
            tokens.push(token);
        }
    }

    /// Skips whitespace, commas, the BOM, line terminators, and comments.
    fn skip_ignored(&mut self) {
        while let Some(ch) = self.peek_char() {
            match ch {
                ' ' | '\t' | ',' | '\u{FEFF}' | '\n' | '\r' => {
                    self.consume_char();
                }
                '#' => self.skip_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `#` comment up to (not including) the next line terminator.
    fn skip_comment(&mut self) {
        let rest = self.remaining();
        let end = memchr::memchr2(b'\n', b'\r', rest.as_bytes()).unwrap_or(rest.len());
        self.col += rest[..end].chars().count();
        self.offset += end;
    }

    // =========================================================================
    // Ellipsis
    // =========================================================================

    /// `...` is the only multi-character punctuator; a lone `.` is an error.
    fn lex_ellipsis(&mut self, start: SourcePosition) -> Result<Token, LexError> {
        if self.remaining().starts_with("...") {
            for _ in 0..3 {
                self.consume_char();
            }
            Ok(Token::new(
                TokenKind::Punct(Punct::Ellipsis),
                "...",
                self.span_from(start),
            ))
        } else {
            Err(LexError::new("Unexpected character `.`", start))
        }
    }

    // =========================================================================
    // Names
    // =========================================================================

    fn lex_name(&mut self, start: SourcePosition) -> Token {
        let name_start = self.offset;
        self.consume_char();
        while matches!(self.peek_char(), Some(c) if is_name_continue(c)) {
            self.consume_char();
        }
        let name = &self.source[name_start..self.offset];
        Token::new(
            TokenKind::Name(name.to_string()),
            name,
            self.span_from(start),
        )
    }

    // =========================================================================
    // Numbers
    // =========================================================================

    /// Lexes an integer or float literal into its decomposed parts.
    ///
    /// Shape: optional `-`; integer part `0` alone or `[1-9][0-9]*`; optional
    /// fraction `.` + digits; optional exponent `e|E` + optional sign +
    /// digits. A fraction or exponent with no digits is a hard error.
    fn lex_number(&mut self, start: SourcePosition) -> Result<Token, LexError> {
        let lexeme_start = self.offset;

        let negated = if self.peek_char() == Some('-') {
            self.consume_char();
            true
        } else {
            false
        };

        let int_start = self.offset;
        match self.peek_char() {
            Some('0') => {
                self.consume_char();
                if matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    return Err(LexError::new(
                        "Invalid number: leading zeros are not allowed",
                        self.position(),
                    ));
                }
            }
            Some(c) if c.is_ascii_digit() => {
                while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                    self.consume_char();
                }
            }
            _ => return Err(LexError::new("Expected a digit", self.position())),
        }
        let integer_part = self.source[int_start..self.offset].to_string();

        let mut fractional_part = None;
        if self.peek_char() == Some('.') {
            self.consume_char();
            let frac_start = self.offset;
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(LexError::new("Expected a digit", self.position()));
            }
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.consume_char();
            }
            fractional_part = Some(self.source[frac_start..self.offset].to_string());
        }

        let mut exponent_part = None;
        if let Some(marker) = self.peek_char()
            && (marker == 'e' || marker == 'E')
        {
            self.consume_char();
            let sign = match self.peek_char() {
                Some(c @ ('+' | '-')) => {
                    self.consume_char();
                    Some(c)
                }
                _ => None,
            };
            let digit_start = self.offset;
            if !matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                return Err(LexError::new("Expected a digit", self.position()));
            }
            while matches!(self.peek_char(), Some(c) if c.is_ascii_digit()) {
                self.consume_char();
            }
            exponent_part = Some(Exponent::new(
                marker,
                sign,
                &self.source[digit_start..self.offset],
            ));
        }

        let literal = NumericLiteral::new(negated, integer_part, fractional_part, exponent_part);
        Ok(Token::new(
            TokenKind::Number(literal),
            &self.source[lexeme_start..self.offset],
            self.span_from(start),
        ))
    }

    // =========================================================================
    // Strings
    // =========================================================================

    fn lex_string(&mut self, start: SourcePosition) -> Result<Token, LexError> {
        let lexeme_start = self.offset;
        self.consume_char(); // opening quote

        if self.peek_char() == Some('"') {
            self.consume_char();
            if self.peek_char() == Some('"') {
                self.consume_char();
                return self.lex_block_string(start, lexeme_start);
            }
            // `""` followed by anything other than `"` is the empty string.
            return Ok(Token::new(
                TokenKind::String(String::new()),
                "\"\"",
                self.span_from(start),
            ));
        }

        let mut value = String::new();
        loop {
            match self.peek_char() {
                None => return Err(LexError::new("Unterminated string", self.position())),
                Some('"') => {
                    self.consume_char();
                    break;
                }
                Some('\n' | '\r') => {
                    return Err(LexError::new("Unterminated string", self.position()));
                }
                Some('\\') => {
                    self.consume_char();
                    value.push(self.lex_escape()?);
                }
                Some(c) => {
                    self.consume_char();
                    value.push(c);
                }
            }
        }
        Ok(Token::new(
            TokenKind::String(value),
            &self.source[lexeme_start..self.offset],
            self.span_from(start),
        ))
    }

    /// Decodes one escape sequence; the leading `\` is already consumed.
    fn lex_escape(&mut self) -> Result<char, LexError> {
        let position = self.position();
        match self.consume_char() {
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000C}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => {
                let mut hex = String::with_capacity(4);
                for _ in 0..4 {
                    match self.consume_char() {
                        Some(c) if c.is_ascii_hexdigit() => hex.push(c),
                        _ => {
                            return Err(LexError::new(
                                format!("Invalid unicode escape `\\u{hex}`"),
                                position,
                            ));
                        }
                    }
                }
                u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or_else(|| {
                        LexError::new(format!("Invalid unicode escape `\\u{hex}`"), position)
                    })
            }
            Some(other) => Err(LexError::new(
                format!("Invalid escape sequence `\\{other}`"),
                position,
            )),
            None => Err(LexError::new("Unterminated string", position)),
        }
    }

    /// Lexes a `"""` block string; the opening quotes are already consumed.
    ///
    /// Block strings allow raw `"` and line terminators; `\"""` is the only
    /// escape. Shared leading whitespace is stripped from the decoded value.
    fn lex_block_string(
        &mut self,
        start: SourcePosition,
        lexeme_start: usize,
    ) -> Result<Token, LexError> {
        let mut raw = String::new();
        loop {
            if self.remaining().starts_with("\\\"\"\"") {
                for _ in 0..4 {
                    self.consume_char();
                }
                raw.push_str("\"\"\"");
            } else if self.remaining().starts_with("\"\"\"") {
                for _ in 0..3 {
                    self.consume_char();
                }
                break;
            } else {
                match self.consume_char() {
                    Some(c) => raw.push(c),
                    None => {
                        return Err(LexError::new("Unterminated string", self.position()));
                    }
                }
            }
        }
        Ok(Token::new(
            TokenKind::String(strip_block_indent(&raw)),
            &self.source[lexeme_start..self.offset],
            self.span_from(start),
        ))
    }
}

/// Strips the shared leading whitespace of a block string's content.
///
/// Blank leading and trailing lines are dropped; the minimum leading-space
/// count over the retained lines is stripped from each of them; lines are
/// rejoined with a line feed.
fn strip_block_indent(raw: &str) -> String {
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines: Vec<&str> = normalized.split('\n').collect();

    while lines.first().is_some_and(|line| line.trim().is_empty()) {
        lines.remove(0);
    }
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    let indent = lines
        .iter()
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|line| &line[indent..])
        .collect::<Vec<_>>()
        .join("\n")
}

fn single_punct(ch: char) -> Option<Punct> {
    match ch {
        '!' => Some(Punct::Bang),
        '$' => Some(Punct::Dollar),
        '&' => Some(Punct::Ampersand),
        '(' => Some(Punct::ParenOpen),
        ')' => Some(Punct::ParenClose),
        ':' => Some(Punct::Colon),
        '=' => Some(Punct::Equals),
        '@' => Some(Punct::At),
        '[' => Some(Punct::SquareOpen),
        ']' => Some(Punct::SquareClose),
        '{' => Some(Punct::CurlyOpen),
        '}' => Some(Punct::CurlyClose),
        '|' => Some(Punct::Pipe),
        _ => None,
    }
}

fn is_name_start(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphabetic()
}

fn is_name_continue(ch: char) -> bool {
    ch == '_' || ch.is_ascii_alphanumeric()
}
