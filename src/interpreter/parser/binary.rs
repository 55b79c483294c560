use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::core::{ParseResult, Parser},
        token::{Token, TokenKind},
    },
};

impl<I> Parser<'_, I> where I: Iterator<Item = Token>
{
    /// Parses an assignment.
    ///
    /// Assignment is right-associative: `a := b := 1` assigns to `b` first.
    /// Only a bare variable may appear on the left; any other target is
    /// reported as a diagnostic and the already parsed left side is returned
    /// so parsing can continue.
    ///
    /// The rule is: `assignment := equality (":=" assignment)?`
    pub(in crate::interpreter::parser) fn parse_assignment(&mut self) -> ParseResult<Expr> {
        let expr = self.parse_equality()?;

        if let Some(assign) = self.advance_if(&[TokenKind::Assign]) {
            let value = self.nested("Expression nested too deeply.", Self::parse_assignment)?;

            if let Expr::Variable { name } = expr {
                return Ok(Expr::Assignment { name,
                                             value: Box::new(value) });
            }
            self.report(&assign, "Invalid assignment target.");
        }

        Ok(expr)
    }

    /// Parses equality and logical AND, which share a precedence level.
    ///
    /// The rule is: `equality := comparison (("=" | "&") comparison)*`
    fn parse_equality(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_comparison()?;
        while let Some((op, token)) =
            self.advance_if_operator(&[BinaryOperator::Equal, BinaryOperator::And])
        {
            let right = self.parse_comparison()?;
            left = binary(left, op, token, right);
        }
        Ok(left)
    }

    /// Parses `<` comparisons.
    ///
    /// The rule is: `comparison := additive ("<" additive)*`
    fn parse_comparison(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_additive()?;
        while let Some((op, token)) = self.advance_if_operator(&[BinaryOperator::Less]) {
            let right = self.parse_additive()?;
            left = binary(left, op, token, right);
        }
        Ok(left)
    }

    /// Parses addition and subtraction expressions.
    ///
    /// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
    fn parse_additive(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_multiplicative()?;
        while let Some((op, token)) =
            self.advance_if_operator(&[BinaryOperator::Add, BinaryOperator::Sub])
        {
            let right = self.parse_multiplicative()?;
            left = binary(left, op, token, right);
        }
        Ok(left)
    }

    /// Parses multiplication and division expressions.
    ///
    /// The rule is: `multiplicative := unary (("*" | "/") unary)*`
    fn parse_multiplicative(&mut self) -> ParseResult<Expr> {
        let mut left = self.parse_unary()?;
        while let Some((op, token)) =
            self.advance_if_operator(&[BinaryOperator::Mul, BinaryOperator::Div])
        {
            let right = self.parse_unary()?;
            left = binary(left, op, token, right);
        }
        Ok(left)
    }

    /// Consumes the lookahead token if it is one of the given operators.
    fn advance_if_operator(&mut self,
                           operators: &[BinaryOperator])
                           -> Option<(BinaryOperator, Token)> {
        let op = token_to_binary_operator(self.peek().kind)?;
        if operators.contains(&op) {
            Some((op, self.advance()))
        } else {
            None
        }
    }
}

fn binary(left: Expr, op: BinaryOperator, token: Token, right: Expr) -> Expr {
    Expr::Binary { left: Box::new(left),
                   op,
                   token,
                   right: Box::new(right) }
}

/// Maps a token kind to its corresponding binary operator.
///
/// # Example
/// ```
/// use minipl::{
///     ast::BinaryOperator,
///     interpreter::{parser::binary::token_to_binary_operator, token::TokenKind},
/// };
///
/// assert_eq!(token_to_binary_operator(TokenKind::Add), Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(TokenKind::And), Some(BinaryOperator::And));
/// assert_eq!(token_to_binary_operator(TokenKind::Assign), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Add => Some(BinaryOperator::Add),
        TokenKind::Sub => Some(BinaryOperator::Sub),
        TokenKind::Mult => Some(BinaryOperator::Mul),
        TokenKind::Div => Some(BinaryOperator::Div),
        TokenKind::Lt => Some(BinaryOperator::Less),
        TokenKind::Eq => Some(BinaryOperator::Equal),
        TokenKind::And => Some(BinaryOperator::And),
        _ => None,
    }
}
