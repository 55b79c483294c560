use crate::{
    ast::UnaryOperator,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, token::Token, value::core::Value},
};

/// Evaluates a unary operation on a value.
///
/// `!` negates a boolean. Any other operand is an error reported at the
/// operator token.
///
/// # Example
/// ```
/// use minipl::{
///     ast::UnaryOperator,
///     interpreter::{
///         evaluator::unary::eval_unary,
///         token::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let bang = Token::new(TokenKind::Not, "!", 1, 1);
///
/// let v = eval_unary(UnaryOperator::Not, &Value::Bool(false), &bang).unwrap();
/// assert_eq!(v, Value::Bool(true));
///
/// assert!(eval_unary(UnaryOperator::Not, &Value::Number(1.0), &bang).is_err());
/// ```
pub fn eval_unary(op: UnaryOperator, value: &Value, token: &Token) -> EvalResult<Value> {
    match (op, value) {
        (UnaryOperator::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOperator::Not, _) => {
            Err(RuntimeError::new(token, RuntimeErrorKind::OperandMustBeBoolean))
        },
    }
}
