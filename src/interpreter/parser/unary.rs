use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

const TOO_DEEP: &str = "Expression nested too deeply.";

impl<I> Parser<'_, I> where I: Iterator<Item = Token>
{
    /// Parses prefix negation.
    ///
    /// The rule is: `unary := "!" unary | primary`
    pub(in crate::interpreter::parser) fn parse_unary(&mut self) -> ParseResult<Expr> {
        if let Some(token) = self.advance_if(&[TokenKind::Not]) {
            let operand = self.nested(TOO_DEEP, Self::parse_unary)?;
            return Ok(Expr::Unary { op: UnaryOperator::Not,
                                    token,
                                    operand: Box::new(operand) });
        }
        self.parse_primary()
    }

    /// Parses literals, variables and parenthesized expressions.
    ///
    /// The rule is: `primary := INTEGER | STRING | BOOLEAN | IDENT | "("
    /// expression ")"`
    fn parse_primary(&mut self) -> ParseResult<Expr> {
        match self.peek().kind {
            TokenKind::Integer | TokenKind::String | TokenKind::Boolean => {
                let token = self.advance();
                let value = token.literal.unwrap_or_else(|| LiteralValue::Str(token.lexeme));
                Ok(Expr::Literal { value })
            },
            TokenKind::Ident => Ok(Expr::Variable { name: self.advance() }),
            TokenKind::LeftParen => {
                self.advance();
                let expr = self.nested(TOO_DEEP, Self::parse_expression)?;
                self.consume(TokenKind::RightParen, "Expected ')' after expression.")?;
                Ok(Expr::Grouping { expr: Box::new(expr) })
            },
            _ => Err(self.error("Expected expression.")),
        }
    }
}
