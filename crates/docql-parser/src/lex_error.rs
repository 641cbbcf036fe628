use crate::SourcePosition;

/// An error produced while tokenizing source text.
///
/// Lexing is fail-fast: the first malformed construct aborts the scan and no
/// partial token stream is returned. `line` and `col` are 1-based.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("{message} at {line}:{col}")]
pub struct LexError {
    pub message: String,
    pub line: usize,
    pub col: usize,
}

impl LexError {
    pub(crate) fn new(message: impl Into<String>, position: SourcePosition) -> Self {
        Self {
            message: message.into(),
            line: position.line(),
            col: position.col(),
        }
    }
}
