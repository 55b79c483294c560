use std::cell::RefCell;

use thiserror::Error;

use crate::{
    error::ParseError,
    interpreter::token::{Token, TokenKind},
};

/// A lexical or syntax error reported while scanning or parsing.
///
/// Diagnostics never stop the pass that reports them; they are collected so a
/// single run can surface many of them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// A character sequence the lexer could not turn into a token.
    #[error("[{line}:{column}] Error: {message}")]
    Lexical {
        /// The source line where the error occurred.
        line:    usize,
        /// The source column where the error occurred.
        column:  usize,
        /// Description of the problem.
        message: String,
    },
    /// A token the parser did not expect.
    #[error("[{line}] Error: {location}: {message}")]
    Syntax {
        /// The source line where the error occurred.
        line:     usize,
        /// `at 'lexeme'`, or `at end` for the end of input.
        location: String,
        /// Description of the problem.
        message:  String,
    },
}

impl Diagnostic {
    /// Builds a syntax diagnostic located at `token`.
    #[must_use]
    pub fn at_token(token: &Token, message: impl Into<String>) -> Self {
        Self::Syntax { line:     token.line,
                       location: location(token),
                       message:  message.into(), }
    }

    /// The source line the diagnostic points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Lexical { line, .. } | Self::Syntax { line, .. } => *line,
        }
    }

    /// The bare message, without position information.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Lexical { message, .. } | Self::Syntax { message, .. } => message,
        }
    }
}

impl From<ParseError> for Diagnostic {
    fn from(error: ParseError) -> Self {
        Self::at_token(&error.token, error.message)
    }
}

/// Describes where a token sits for error messages.
pub(crate) fn location(token: &Token) -> String {
    if token.kind == TokenKind::Eof {
        "at end".to_string()
    } else {
        format!("at '{}'", token.lexeme)
    }
}

/// Collects the diagnostics of one scan/parse pass.
///
/// The lexer and the parser both hold a shared reference to the same
/// collector, so a lazily scanned token stream can be parsed while both stages
/// report into it. Once the pass is over, [`Diagnostics::had_error`] decides
/// whether the program may be executed.
///
/// # Example
/// ```
/// use minipl::{error::Diagnostics, interpreter::lexer::scan};
///
/// let diagnostics = Diagnostics::new();
/// let tokens = scan("print 1 ? 2;", &diagnostics);
///
/// assert!(diagnostics.had_error());
/// assert_eq!(tokens.len(), 6);
/// ```
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a diagnostic.
    pub fn report(&self, diagnostic: Diagnostic) {
        tracing::debug!(%diagnostic, "diagnostic reported");
        self.entries.borrow_mut().push(diagnostic);
    }

    /// Returns `true` once anything has been reported.
    #[must_use]
    pub fn had_error(&self) -> bool {
        !self.is_empty()
    }

    /// Number of diagnostics reported so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns `true` if nothing has been reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// A copy of the diagnostics reported so far, in report order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Diagnostic> {
        self.entries.borrow().clone()
    }

    /// Consumes the collector, returning its diagnostics in report order.
    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries.into_inner()
    }
}
