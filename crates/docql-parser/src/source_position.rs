/// A line/column position within a source document.
///
/// Both values are 1-based: the first character of a document sits at line 1,
/// column 1. Columns count Unicode scalar values, not bytes, so a 4-byte
/// emoji advances the column by exactly one.
///
/// This is a pure data struct; the lexer is responsible for computing
/// position values as it scans input.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct SourcePosition {
    /// 1-based line number.
    line: usize,

    /// 1-based column (in Unicode scalar values) within the line.
    col: usize,
}

impl SourcePosition {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Returns the 1-based line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Returns the 1-based column within the line.
    pub fn col(&self) -> usize {
        self.col
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
