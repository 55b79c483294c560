use std::io::{BufRead, Write};

use crate::{
    ast::{Expr, Statement},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        evaluator::core::{EvalResult, Interpreter},
        token::Token,
        value::core::Value,
    },
};

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Executes a `for` loop.
    ///
    /// Both bounds are evaluated once, before the first iteration, and must
    /// be numbers. The loop variable must already be declared. It is marked
    /// as a control variable for the duration of the loop, then takes every
    /// value from `start` to `end` inclusive in steps of one, the body running
    /// once per value. A range with `start > end` runs the body zero times but
    /// still marks and releases the variable.
    ///
    /// Once the loop ends the variable keeps its last value and can be
    /// assigned again. A runtime error in the body aborts the loop; the mark
    /// is released before the error propagates.
    ///
    /// # Example
    /// ```
    /// use minipl::{interpreter::evaluator::core::Interpreter, run};
    ///
    /// let mut interpreter = Interpreter::with_io(&b""[..], Vec::new());
    /// run("var i : int; for i in 1..3 do print i; end for; i := 10; print i;",
    ///     &mut interpreter).unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"12310");
    /// ```
    pub fn execute_for(&mut self,
                       variable: &Token,
                       start: &Expr,
                       end: &Expr,
                       body: &[Statement])
                       -> EvalResult<()> {
        let start = self.evaluate_bound(start, variable)?;
        let end = self.evaluate_bound(end, variable)?;

        self.environment_mut().set_as_control(variable)?;
        tracing::debug!(variable = %variable.lexeme, start, end, "loop entered");

        let result = self.run_iterations(variable, start, end, body);
        let released = self.environment_mut().remove_from_control(variable);

        result.and(released)
    }

    fn run_iterations(&mut self,
                      variable: &Token,
                      start: f64,
                      end: f64,
                      body: &[Statement])
                      -> EvalResult<()> {
        for step in 0..iteration_count(start, end) {
            #[allow(clippy::cast_precision_loss)]
            let counter = start + step as f64;
            self.environment_mut().control_assign(variable, Value::Number(counter))?;
            self.execute_all(body)?;
        }
        Ok(())
    }

    fn evaluate_bound(&mut self, bound: &Expr, variable: &Token) -> EvalResult<f64> {
        match self.evaluate(bound)? {
            Value::Number(n) => Ok(n),
            other => {
                tracing::trace!(found = other.type_name(), "non-numeric loop bound");
                Err(RuntimeError::new(variable, RuntimeErrorKind::LoopBoundsMustBeNumbers))
            },
        }
    }
}

/// Number of values from `start` to `end` inclusive in steps of one.
///
/// Counted up front so the loop ends even where adding one to a large `f64`
/// no longer changes it. An empty or NaN range counts zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn iteration_count(start: f64, end: f64) -> u64 {
    if start <= end {
        ((end - start).floor() as u64).saturating_add(1)
    } else {
        0
    }
}
