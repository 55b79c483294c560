//! # minipl
//!
//! minipl is an interpreter for Mini-PL, a small teaching language written
//! in Rust. It scans, parses and executes programs made of typed variable
//! declarations, arithmetic, relational and logical expressions, `print`,
//! `read`, `assert` and a bounded `for` loop.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::io::{BufRead, Write};

use crate::{
    ast::Statement,
    error::{Diagnostics, Error},
    interpreter::{evaluator::core::Interpreter, lexer::Lexer, parser::core::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser and traversed by the evaluator and the printer.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Keeps the tokens runtime errors point at.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the diagnostics reported while scanning and parsing,
/// and the errors raised while a program runs. Every error carries the source
/// location it refers to.
///
/// # Responsibilities
/// - Defines the diagnostic and runtime error types.
/// - Collects diagnostics across the lexer and the parser.
/// - Formats errors the way they are shown to the user.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and value
/// representations to provide a complete runtime for Mini-PL programs.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, environment, evaluator
///   and value types.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Debug rendering of parsed programs.
pub mod printer;
/// General utilities shared across phases.
///
/// Escape sequence resolution and source position bookkeeping.
pub mod util;

/// Scans and parses `source` without executing it.
///
/// # Errors
/// Returns [`Error::Diagnostics`] with every lexical and syntax error found
/// if there was any.
///
/// # Example
/// ```
/// use minipl::parse_source;
///
/// assert_eq!(parse_source("var x : int; print x;").unwrap().len(), 2);
/// assert!(parse_source("var x int; print ;").is_err());
/// ```
pub fn parse_source(source: &str) -> Result<Vec<Statement>, Error> {
    let diagnostics = Diagnostics::new();
    let program = Parser::new(Lexer::new(source, &diagnostics), &diagnostics).parse();

    if diagnostics.had_error() {
        return Err(Error::Diagnostics(diagnostics.into_vec()));
    }
    Ok(program)
}

/// Scans, parses and executes `source` on an existing interpreter.
///
/// The interpreter keeps its variables between calls, so consecutive runs
/// see each other's declarations. A program that produced any diagnostic is
/// not executed at all.
///
/// # Errors
/// Returns [`Error::Diagnostics`] if scanning or parsing reported anything,
/// or [`Error::Runtime`] for the runtime error that stopped execution.
///
/// # Examples
/// ```
/// use minipl::{error::Error, interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::with_io(&b""[..], Vec::new());
///
/// run("var greeting : string := \"a\" + \"b\";", &mut interpreter).unwrap();
/// run("print greeting;", &mut interpreter).unwrap();
/// assert_eq!(interpreter.output(), b"ab");
///
/// // A stray character is reported and nothing runs, not even the valid print.
/// let err = run("print 1; ?", &mut interpreter).unwrap_err();
/// assert!(matches!(err, Error::Diagnostics(_)));
/// assert_eq!(interpreter.output(), b"ab");
/// ```
pub fn run<R, W>(source: &str, interpreter: &mut Interpreter<R, W>) -> Result<(), Error>
    where R: BufRead,
          W: Write
{
    let program = parse_source(source)?;
    interpreter.interpret(&program)?;
    Ok(())
}
