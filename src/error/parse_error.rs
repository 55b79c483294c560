use thiserror::Error;

use crate::interpreter::token::Token;

/// An unexpected token met while parsing.
///
/// Parse errors unwind the statement being parsed. The parser then reports
/// them as a [`Diagnostic`](crate::error::Diagnostic) and resynchronizes, so
/// they never escape a parse pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// The offending token.
    pub token:   Token,
    /// Description of what was expected.
    pub message: String,
}

impl ParseError {
    /// Creates a parse error at `token`.
    #[must_use]
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        Self { token,
               message: message.into() }
    }
}
