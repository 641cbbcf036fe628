use crate::SourcePosition;

/// A contiguous region of source text.
///
/// `start` points at the first character of the region; `end` points just
/// past its last character, so an empty region has `start == end`.
///
/// The end-of-input token carries the sentinel span returned by
/// [`SourceSpan::eof()`]. Its positions sit on line 0, a value no real span
/// can have since positions are 1-based, which makes it distinguishable from
/// every span the lexer produces for actual source text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SourceSpan {
    start: SourcePosition,
    end: SourcePosition,
}

impl SourceSpan {
    pub fn new(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }

    /// The sentinel span carried by the end-of-input token.
    pub fn eof() -> Self {
        Self {
            start: SourcePosition::new(0, 0),
            end: SourcePosition::new(0, 0),
        }
    }

    /// Returns `true` if this is the end-of-input sentinel.
    pub fn is_eof(&self) -> bool {
        self.start.line() == 0
    }

    /// Returns the position of the first character of the region.
    pub fn start(&self) -> SourcePosition {
        self.start
    }

    /// Returns the position just past the last character of the region.
    pub fn end(&self) -> SourcePosition {
        self.end
    }

    /// Returns the smallest span covering both `self` and `other`.
    pub fn to(&self, other: SourceSpan) -> SourceSpan {
        SourceSpan {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl std::fmt::Display for SourceSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_eof() {
            write!(f, "end of input")
        } else {
            write!(f, "{}", self.start)
        }
    }
}
