use thiserror::Error;

/// The aggregate validation failure: every rule violation found in one
/// document, in the order the rules reported them.
///
/// Displays as one message per line.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{}", .errors.join("\n"))]
pub struct InvalidDocument {
    pub errors: Vec<String>,
}

impl InvalidDocument {
    /// Whether any collected message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.errors.iter().any(|error| error.contains(needle))
    }
}
