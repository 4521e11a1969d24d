use std::fmt;

/// A hex color literal that could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
    /// 0-based byte offset into the input where the problem was found.
    pub offset: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, offset: usize) -> Self {
        Self { message: msg.into(), offset }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hex color parse error at offset {}: {}", self.offset, self.message)
    }
}

impl std::error::Error for ParseError {}
