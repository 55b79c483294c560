/// Core evaluation logic and interpreter state.
///
/// Contains the [`Interpreter`](core::Interpreter), statement execution and
/// expression dispatch, and the top-level error boundary of a run.
pub mod core;

/// Binary operator evaluation logic.
///
/// Handles arithmetic, string concatenation, comparison, equality and
/// logical AND.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements logical negation.
pub mod unary;

/// Evaluation of `for` loops.
///
/// Evaluates the range, drives the control variable and executes the loop
/// body.
pub mod for_loop;

/// The `print` and `read` statements.
///
/// Writes values to the interpreter's output and pulls whitespace-delimited
/// words from its input.
pub mod io;
