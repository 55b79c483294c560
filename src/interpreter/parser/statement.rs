use crate::{
    ast::{Expr, Statement, TypeName},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<'_, I> where I: Iterator<Item = Token>
{
    /// Parses a single statement.
    ///
    /// A statement may be one of:
    /// - a variable declaration (`var`),
    /// - a `for` loop,
    /// - a `read`, `print` or `assert` statement,
    /// - an expression used as a statement.
    ///
    /// The leading keyword decides; anything else is parsed as an expression
    /// statement.
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> ParseResult<Statement> {
        match self.peek().kind {
            TokenKind::Var => self.parse_variable_declaration(),
            TokenKind::For => self.parse_for_loop(),
            TokenKind::Read => self.parse_read(),
            TokenKind::Print => self.parse_print(),
            TokenKind::Assert => self.parse_assert(),
            _ => self.parse_expression_statement(),
        }
    }

    /// Parses a variable declaration.
    ///
    /// Grammar: `varDecl := "var" IDENT ":" type (":=" expression)? ";"`
    ///
    /// Without an initializer the declaration receives the declared type's
    /// default literal, so later stages never see a missing initializer.
    fn parse_variable_declaration(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Var, "Expected 'var'.")?;
        let name = self.consume(TokenKind::Ident, "Expected variable name after 'var'.")?;
        self.consume(TokenKind::Colon, "Expected ':' after variable name.")?;

        let Some(declared) = TypeName::from_kind(self.peek().kind) else {
            return Err(self.error("Expected type 'int', 'string' or 'bool'."));
        };
        let type_name = self.advance();

        let initializer = if self.advance_if(&[TokenKind::Assign]).is_some() {
            self.parse_expression()?
        } else {
            Expr::literal(declared.default_literal())
        };

        self.consume(TokenKind::Semicolon, "Expected ';' after variable declaration.")?;
        Ok(Statement::VarDecl { name,
                                type_name,
                                initializer })
    }

    /// Parses a `for` loop.
    ///
    /// Grammar:
    /// `forLoop := "for" IDENT "in" expression ".." expression "do" statement*
    /// "end" "for" ";"`
    fn parse_for_loop(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::For, "Expected 'for'.")?;
        let variable = self.consume(TokenKind::Ident, "Expected loop variable name after 'for'.")?;
        self.consume(TokenKind::In, "Expected 'in' after loop variable.")?;
        let start = self.parse_expression()?;
        self.consume(TokenKind::Range, "Expected '..' between loop bounds.")?;
        let end = self.parse_expression()?;
        self.consume(TokenKind::Do, "Expected 'do' after loop range.")?;

        let body = self.nested("Loops nested too deeply.", Self::parse_block)?;

        self.consume(TokenKind::For, "Expected 'for' after 'end'.")?;
        self.consume(TokenKind::Semicolon, "Expected ';' after 'end for'.")?;
        Ok(Statement::ForLoop { variable,
                                start,
                                end,
                                body })
    }

    /// Parses a `read` statement.
    ///
    /// Grammar: `readStmt := "read" IDENT ";"`
    fn parse_read(&mut self) -> ParseResult<Statement> {
        self.consume(TokenKind::Read, "Expected 'read'.")?;
        let name = self.consume(TokenKind::Ident, "Expected variable name after 'read'.")?;
        self.consume(TokenKind::Semicolon, "Expected ';' after read statement.")?;
        Ok(Statement::Read { name })
    }

    /// Parses a `print` statement.
    ///
    /// Grammar: `printStmt := "print" expression ";"`
    fn parse_print(&mut self) -> ParseResult<Statement> {
        let keyword = self.consume(TokenKind::Print, "Expected 'print'.")?;
        let expr = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after value.")?;
        Ok(Statement::Print { keyword, expr })
    }

    /// Parses an `assert` statement.
    ///
    /// Grammar: `assertStmt := "assert" "(" expression ")" ";"`
    fn parse_assert(&mut self) -> ParseResult<Statement> {
        let keyword = self.consume(TokenKind::Assert, "Expected 'assert'.")?;
        self.consume(TokenKind::LeftParen, "Expected '(' after 'assert'.")?;
        let expr = self.parse_expression()?;
        self.consume(TokenKind::RightParen, "Expected ')' after assertion.")?;
        self.consume(TokenKind::Semicolon, "Expected ';' after assertion.")?;
        Ok(Statement::Assert { keyword, expr })
    }

    /// Parses an expression statement.
    ///
    /// Grammar: `exprStmt := expression ";"`
    fn parse_expression_statement(&mut self) -> ParseResult<Statement> {
        let expr = self.parse_expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after expression.")?;
        Ok(Statement::Expression { expr })
    }
}
