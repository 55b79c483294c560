use crate::{
    ast::Statement,
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<'_, I> where I: Iterator<Item = Token>
{
    /// Parses a loop body.
    ///
    /// A body consists of zero or more statements, up to and including the
    /// closing `end` keyword. Each statement recovers from its own syntax
    /// errors, so one malformed line does not discard the rest of the body.
    ///
    /// Grammar: `block := statement* "end"`
    pub(in crate::interpreter::parser) fn parse_block(&mut self) -> ParseResult<Vec<Statement>> {
        let mut statements = Vec::new();

        while !self.check(TokenKind::End) && !self.check(TokenKind::Eof) {
            if let Some(statement) = self.parse_statement_or_recover() {
                statements.push(statement);
            }
        }

        self.consume(TokenKind::End, "Expected 'end' after loop body.")?;
        Ok(statements)
    }
}
