/// Lexical and syntax diagnostics.
///
/// Defines the [`Diagnostic`] type and the [`Diagnostics`] collector shared
/// by the lexer and the parser. Diagnostics are non-fatal to the pass that
/// reports them, but a program that produced any must not be executed.
pub mod diagnostic;
/// Parsing errors.
///
/// The error used internally to unwind a statement during panic-mode
/// recovery.
pub mod parse_error;
/// Runtime errors.
///
/// Contains the error raised during evaluation: type mismatches, undefined
/// or redefined variables, loop control violations, failed assertions and
/// I/O failures.
pub mod runtime_error;

pub use diagnostic::{Diagnostic, Diagnostics};
pub use parse_error::ParseError;
pub use runtime_error::{RuntimeError, RuntimeErrorKind};
use thiserror::Error;

/// Why running a piece of source did not complete.
#[derive(Debug, Error)]
pub enum Error {
    /// Scanning or parsing reported diagnostics; nothing was executed.
    #[error("{}", render(.0))]
    Diagnostics(Vec<Diagnostic>),
    /// Execution stopped at a runtime error.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

fn render(diagnostics: &[Diagnostic]) -> String {
    diagnostics.iter()
               .map(ToString::to_string)
               .collect::<Vec<_>>()
               .join("\n")
}
