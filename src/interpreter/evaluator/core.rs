use std::{
    collections::VecDeque,
    io::{self as stdio, BufRead, BufReader, Stdin, Stdout, Write},
};

use crate::{
    ast::{Expr, Statement},
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{
        environment::Environment,
        evaluator::{binary::eval_binary, unary::eval_unary},
        value::core::Value,
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// A tree-walking interpreter.
///
/// The interpreter owns the [`Environment`], which lives as long as the
/// interpreter does: in interactive use one interpreter runs every line the
/// user enters, and variables persist from one line to the next.
///
/// `read` pulls from `input` and `print` writes to `output`.
/// [`Interpreter::new`] binds them to the process's stdin and stdout;
/// [`Interpreter::with_io`] accepts any reader and writer.
///
/// # Example
/// ```
/// use minipl::{interpreter::evaluator::core::Interpreter, run};
///
/// let mut interpreter = Interpreter::with_io(&b""[..], Vec::new());
/// run("var x : int := 1 + 2 * 3; print x;", &mut interpreter).unwrap();
///
/// assert_eq!(interpreter.output(), b"7");
/// ```
pub struct Interpreter<R, W> {
    environment:              Environment,
    pub(super) input:         R,
    pub(super) output:        W,
    pub(super) pending_words: VecDeque<String>,
}

impl Interpreter<BufReader<Stdin>, Stdout> {
    /// Creates an interpreter reading from stdin and printing to stdout.
    ///
    /// Stdin is locked only for the duration of each read, so a line editor
    /// can share it between statements. The one-byte buffer leaves unread
    /// input in stdin's own buffer, where the editor still sees it.
    #[must_use]
    pub fn new() -> Self {
        Self::with_io(BufReader::with_capacity(1, stdio::stdin()), stdio::stdout())
    }
}

impl Default for Interpreter<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, W> Interpreter<R, W>
    where R: BufRead,
          W: Write
{
    /// Creates an interpreter with an empty environment over the given input
    /// and output.
    pub fn with_io(input: R, output: W) -> Self {
        Self { environment: Environment::new(),
               input,
               output,
               pending_words: VecDeque::new() }
    }

    /// The variable store.
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// Everything written so far.
    pub const fn output(&self) -> &W {
        &self.output
    }

    /// Consumes the interpreter, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Executes a program.
    ///
    /// Statements run strictly in order against the persistent environment.
    /// The first runtime error aborts the rest of the run and is returned;
    /// effects of the statements before it remain.
    #[tracing::instrument(level = "debug", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Statement]) -> EvalResult<()> {
        let result = self.execute_all(statements);
        if let Err(error) = &result {
            tracing::debug!(line = error.line(), %error, "run aborted");
        }
        result
    }

    /// Executes statements in order, stopping at the first error.
    pub(super) fn execute_all(&mut self, statements: &[Statement]) -> EvalResult<()> {
        statements.iter().try_for_each(|statement| self.execute(statement))
    }

    /// Executes a single statement.
    pub fn execute(&mut self, statement: &Statement) -> EvalResult<()> {
        ensure_sufficient_stack(|| self.execute_statement(statement))
    }

    fn execute_statement(&mut self, statement: &Statement) -> EvalResult<()> {
        tracing::trace!(?statement, "execute");
        match statement {
            Statement::VarDecl { name, initializer, .. } => {
                let value = self.evaluate(initializer)?;
                self.environment.define(name, value)
            },
            Statement::ForLoop { variable,
                                 start,
                                 end,
                                 body, } => self.execute_for(variable, start, end, body),
            Statement::Read { name } => self.execute_read(name),
            Statement::Print { keyword, expr } => {
                let value = self.evaluate(expr)?;
                self.execute_print(keyword, &value)
            },
            Statement::Assert { keyword, expr } => match self.evaluate(expr)? {
                Value::Bool(true) => Ok(()),
                Value::Bool(false) => {
                    Err(RuntimeError::new(keyword, RuntimeErrorKind::AssertionFailed))
                },
                _ => Err(RuntimeError::new(keyword, RuntimeErrorKind::AssertionNotBoolean)),
            },
            Statement::Expression { expr } => self.evaluate(expr).map(drop),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// Operands are evaluated left to right.
    pub fn evaluate(&mut self, expr: &Expr) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.evaluate_expr(expr))
    }

    fn evaluate_expr(&mut self, expr: &Expr) -> EvalResult<Value> {
        match expr {
            Expr::Literal { value } => Ok(value.into()),
            Expr::Grouping { expr } => self.evaluate(expr),
            Expr::Unary { op, token, operand } => {
                let value = self.evaluate(operand)?;
                eval_unary(*op, &value, token)
            },
            Expr::Binary { left,
                           op,
                           token,
                           right, } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                eval_binary(*op, &left, &right, token)
            },
            Expr::Variable { name } => self.environment.get(name),
            Expr::Assignment { name, value } => {
                let value = self.evaluate(value)?;
                self.environment.assign(name, value.clone())?;
                Ok(value)
            },
        }
    }

    pub(super) fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }
}
