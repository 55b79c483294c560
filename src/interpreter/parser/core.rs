use crate::{
    ast::{Expr, Statement},
    error::{Diagnostic, Diagnostics, ParseError},
    interpreter::token::{Token, TokenKind},
    util::stack::ensure_sufficient_stack,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply expressions and loops may nest before the parser gives up on
/// the statement.
pub const MAX_NESTING_DEPTH: usize = 1000;

/// Recursive-descent parser with panic-mode error recovery.
///
/// The parser pulls tokens from any iterator, so it can consume an eagerly
/// scanned `Vec<Token>` as well as a [`Lexer`](crate::interpreter::lexer::Lexer)
/// that scans on demand. It keeps exactly one token of lookahead.
///
/// Syntax errors are reported to the shared [`Diagnostics`]; the parser then
/// discards tokens up to the next statement boundary and keeps going, so one
/// pass reports as many errors as it can find. A program parsed while
/// diagnostics were reported must not be executed.
///
/// [`TokenKind::ScanError`] tokens were already reported by the lexer and are
/// skipped.
///
/// Nesting deeper than [`MAX_NESTING_DEPTH`] is reported as a syntax error.
pub struct Parser<'d, I> {
    tokens:      I,
    current:     Token,
    depth:       usize,
    diagnostics: &'d Diagnostics,
}

impl<'d, I> Parser<'d, I> where I: Iterator<Item = Token>
{
    /// Creates a parser over `tokens`, reporting into `diagnostics`.
    pub fn new<T>(tokens: T, diagnostics: &'d Diagnostics) -> Self
        where T: IntoIterator<IntoIter = I>
    {
        let mut tokens = tokens.into_iter();
        let current = next_significant(&mut tokens, 1, 1);
        Self { tokens,
               current,
               depth: 0,
               diagnostics }
    }

    /// Parses a whole program.
    ///
    /// Grammar: `program := statement* EOF`
    ///
    /// # Example
    /// ```
    /// use minipl::{
    ///     error::Diagnostics,
    ///     interpreter::{lexer::Lexer, parser::core::Parser},
    /// };
    ///
    /// let diagnostics = Diagnostics::new();
    /// let lexer = Lexer::new("var x : int; print x;", &diagnostics);
    /// let program = Parser::new(lexer, &diagnostics).parse();
    ///
    /// assert_eq!(program.len(), 2);
    /// assert!(!diagnostics.had_error());
    /// ```
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> Vec<Statement> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement_or_recover() {
                statements.push(statement);
            }
        }

        tracing::debug!(count = statements.len(),
                        diagnostics = self.diagnostics.len(),
                        "parsed program");
        statements
    }

    /// Parses one statement. On failure the error is reported and the parser
    /// resynchronizes, returning `None`.
    pub(in crate::interpreter::parser) fn parse_statement_or_recover(&mut self)
                                                                     -> Option<Statement> {
        match self.parse_statement() {
            Ok(statement) => Some(statement),
            Err(error) => {
                self.diagnostics.report(error.into());
                self.synchronize();
                None
            },
        }
    }

    /// Parses a full expression.
    ///
    /// Grammar: `expression := assignment`
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> ParseResult<Expr> {
        self.parse_assignment()
    }

    /// Runs `parse` one nesting level deeper.
    ///
    /// Fails with `message` at the lookahead token once
    /// [`MAX_NESTING_DEPTH`] levels are open.
    pub(in crate::interpreter::parser) fn nested<T>(&mut self,
                                                    message: &str,
                                                    parse: impl FnOnce(&mut Self)
                                                                 -> ParseResult<T>)
                                                    -> ParseResult<T> {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self.error(message));
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;
        result
    }

    /// Discards tokens until just past a `;`, or until a token that can start
    /// a statement, or until the end of input.
    ///
    /// The token that caused the error is always discarded, so recovery makes
    /// progress even when the error sits on a statement keyword.
    fn synchronize(&mut self) {
        let mut discarded = self.advance();

        while !self.check(TokenKind::Eof) {
            if discarded.kind == TokenKind::Semicolon || self.current.starts_statement() {
                return;
            }
            discarded = self.advance();
        }
    }

    /// The lookahead token.
    pub(in crate::interpreter::parser) fn peek(&self) -> &Token {
        &self.current
    }

    /// Returns `true` if the lookahead token has the given kind.
    pub(in crate::interpreter::parser) fn check(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Consumes and returns the lookahead token. At the end of input the EOF
    /// token is returned again without being consumed.
    pub(in crate::interpreter::parser) fn advance(&mut self) -> Token {
        if self.check(TokenKind::Eof) {
            return self.current.clone();
        }
        let next = next_significant(&mut self.tokens, self.current.line, self.current.column);
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the lookahead token if it has one of the given kinds.
    pub(in crate::interpreter::parser) fn advance_if(&mut self, kinds: &[TokenKind])
                                                     -> Option<Token> {
        if kinds.contains(&self.current.kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Consumes a token of the given kind, or fails with `message`.
    pub(in crate::interpreter::parser) fn consume(&mut self,
                                                  kind: TokenKind,
                                                  message: &str)
                                                  -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(self.error(message))
        }
    }

    /// Builds a parse error at the lookahead token.
    pub(in crate::interpreter::parser) fn error(&self, message: &str) -> ParseError {
        ParseError::new(self.current.clone(), message)
    }

    /// Reports a diagnostic without interrupting the parse.
    pub(in crate::interpreter::parser) fn report(&self, token: &Token, message: &str) {
        self.diagnostics.report(Diagnostic::at_token(token, message));
    }
}

/// Pulls the next token that is not a scan error. A source that runs dry
/// without an EOF token gets one synthesized at the last known position.
fn next_significant<I>(tokens: &mut I, line: usize, column: usize) -> Token
    where I: Iterator<Item = Token>
{
    tokens.find(|t| t.kind != TokenKind::ScanError)
          .unwrap_or_else(|| Token::eof(line, column))
}

/// Parses a token sequence into statements.
///
/// Syntax errors land in `diagnostics`; check it before running the result.
pub fn parse<T>(tokens: T, diagnostics: &Diagnostics) -> Vec<Statement>
    where T: IntoIterator<Item = Token>
{
    Parser::new(tokens, diagnostics).parse()
}
