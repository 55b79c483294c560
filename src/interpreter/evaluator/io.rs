use std::io::{BufRead, Write};

use crate::{
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
    /// Writes a value to the output.
    ///
    /// Strings have their escape sequences resolved first. No newline is
    /// appended. Output is flushed immediately so it interleaves correctly
    /// with interactive input.
    pub fn execute_print(&mut self, keyword: &Token, value: &Value) -> EvalResult<()> {
        let text = value.to_output();
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .map_err(|e| RuntimeError::new(keyword, RuntimeErrorKind::Io(e)))
    }

    /// Reads one whitespace-delimited word of input into a declared variable.
    ///
    /// Input is pulled a line at a time; words left over on a line are kept
    /// for the next `read`. The word becomes a number if it parses as one,
    /// then a boolean for exactly `true` or `false`, otherwise a string.
    ///
    /// # Example
    /// ```
    /// use minipl::{interpreter::evaluator::core::Interpreter, run};
    ///
    /// let mut interpreter = Interpreter::with_io(&b"4 five\n"[..], Vec::new());
    /// run("var a : int; var b : string; read a; read b; print a + 1; print b;",
    ///     &mut interpreter).unwrap();
    ///
    /// assert_eq!(interpreter.output(), b"5five");
    /// ```
    pub fn execute_read(&mut self, name: &Token) -> EvalResult<()> {
        let word = self.next_word(name)?;
        let value = Value::from_input(&word);
        tracing::trace!(name = %name.lexeme, %value, "read");
        self.environment_mut().assign(name, value)
    }

    fn next_word(&mut self, name: &Token) -> EvalResult<String> {
        loop {
            if let Some(word) = self.pending_words.pop_front() {
                return Ok(word);
            }

            let mut line = String::new();
            let read = self.input
                           .read_line(&mut line)
                           .map_err(|e| RuntimeError::new(name, RuntimeErrorKind::Io(e)))?;
            if read == 0 {
                return Err(RuntimeError::new(name, RuntimeErrorKind::InputExhausted));
            }
            self.pending_words
                .extend(line.split_whitespace().map(str::to_string));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use pretty_assertions::assert_eq;

    use crate::{
        error::{Error, RuntimeErrorKind},
        interpreter::evaluator::core::Interpreter,
        run,
    };

    #[test]
    fn read_skips_blank_lines_and_splits_words() {
        let mut it = Interpreter::with_io(&b"\n  \n1 true\nhello\n"[..], Vec::new());
        run("var a : int; var b : bool; var c : string; read a; read b; read c; \
             print a; print b; print c;",
            &mut it).unwrap();
        assert_eq!(String::from_utf8(it.into_output()).unwrap(), "1truehello");
    }

    #[test]
    fn read_requires_a_declared_variable() {
        let mut it = Interpreter::with_io(&b"1\n"[..], Vec::new());
        let err = run("read x;", &mut it).unwrap_err();
        assert!(err.to_string().contains("Undefined variable 'x'."));
    }

    #[test]
    fn read_past_end_of_input_fails() {
        let mut it = Interpreter::with_io(&b"1"[..], Vec::new());
        let err = run("var a : int; read a; read a;", &mut it).unwrap_err();
        let Error::Runtime(err) = err else {
            panic!("expected a runtime error, got {err:?}");
        };
        assert!(matches!(err.kind, RuntimeErrorKind::InputExhausted));
        assert_eq!(err.line(), 1);
        assert_eq!(it.environment().lookup("a").map(ToString::to_string), Some("1".into()));
    }

    #[test]
    fn print_resolves_escapes() {
        let mut it = Interpreter::with_io(&b""[..], Vec::new());
        run(r#"print "a\tb\n"; print true; print 10 / 4;"#, &mut it).unwrap();
        assert_eq!(String::from_utf8(it.into_output()).unwrap(), "a\tb\ntrue2.5");
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_runtime_errors() {
        let mut it = Interpreter::with_io(&b""[..], Broken);
        let err = run("print 1;", &mut it).unwrap_err();
        let Error::Runtime(err) = err else {
            panic!("expected a runtime error, got {err:?}");
        };
        assert!(matches!(err.kind, RuntimeErrorKind::Io(_)));
        assert_eq!(err.token.lexeme, "print");
    }
}
