use std::io;

use thiserror::Error;

use crate::{error::diagnostic::location, interpreter::token::Token};

/// Everything that can go wrong while a program runs.
#[derive(Debug, Error)]
pub enum RuntimeErrorKind {
    /// Read or assigned a name that was never declared.
    #[error("Undefined variable '{0}'.")]
    UndefinedVariable(String),
    /// Declared a name twice.
    #[error("Variable '{0}' is already defined.")]
    AlreadyDefined(String),
    /// Ordinary assignment to a running loop's control variable.
    #[error("Cannot assign to control variable '{0}'.")]
    AssignmentToControlVariable(String),
    /// Started a loop over a variable that already controls one.
    #[error("Variable '{0}' is already a control variable.")]
    AlreadyControlVariable(String),
    /// Loop bookkeeping on a variable that controls no loop.
    #[error("Variable '{0}' is not a control variable.")]
    NotControlVariable(String),
    /// `+` applied to anything but two numbers or two strings.
    #[error("Operands must be strings or numbers.")]
    OperandsMustBeStringsOrNumbers,
    /// `-`, `*`, `/` or `<` applied to non-numbers.
    #[error("Operands must be numbers.")]
    OperandsMustBeNumbers,
    /// `&` applied to non-booleans.
    #[error("Operands must be boolean.")]
    OperandsMustBeBoolean,
    /// `!` applied to a non-boolean.
    #[error("Operand must be boolean.")]
    OperandMustBeBoolean,
    /// An `assert` condition evaluated to something other than a boolean.
    #[error("Assertion must be a boolean.")]
    AssertionNotBoolean,
    /// An `assert` condition evaluated to `false`.
    #[error("Assertion failed.")]
    AssertionFailed,
    /// A `for` range bound evaluated to something other than a number.
    #[error("Loop bounds must be numbers.")]
    LoopBoundsMustBeNumbers,
    /// `read` found no more input.
    #[error("Unexpected end of input.")]
    InputExhausted,
    /// Reading input or writing output failed.
    #[error("I/O failure: {0}")]
    Io(#[source] io::Error),
}

/// An error raised while interpreting, carrying the offending token.
///
/// The first runtime error aborts the rest of the current run.
#[derive(Debug, Error)]
#[error("[{}] Error: {}: {}", .token.line, location(.token), .kind)]
pub struct RuntimeError {
    /// Where the error happened.
    pub token: Token,
    /// What happened.
    pub kind:  RuntimeErrorKind,
}

impl RuntimeError {
    /// Creates a runtime error at `token`.
    #[must_use]
    pub fn new(token: &Token, kind: RuntimeErrorKind) -> Self {
        Self { token: token.clone(),
               kind }
    }

    /// The source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.token.line
    }
}
