use crate::{
    ast::BinaryOperator,
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, token::Token, value::core::Value},
};

/// Evaluates a binary operation on two already evaluated operands.
///
/// - `+` adds two numbers or concatenates two strings.
/// - `-`, `*` and `/` require two numbers. Division follows IEEE-754, so
///   dividing by zero yields an infinity or NaN rather than an error.
/// - `<` compares two numbers.
/// - `=` compares any two values: equal when both the type and the contents
///   match, never an error. NaN equals NaN.
/// - `&` requires two booleans. Both sides are always evaluated.
///
/// Type mismatches are reported at the operator token.
///
/// # Example
/// ```
/// use minipl::{
///     ast::BinaryOperator,
///     interpreter::{
///         evaluator::binary::eval_binary,
///         token::{Token, TokenKind},
///         value::core::Value,
///     },
/// };
///
/// let plus = Token::new(TokenKind::Add, "+", 1, 3);
///
/// let sum = eval_binary(BinaryOperator::Add, &2.0.into(), &5.0.into(), &plus).unwrap();
/// assert_eq!(sum, Value::Number(7.0));
///
/// let joined = eval_binary(BinaryOperator::Add, &"a".into(), &"b".into(), &plus).unwrap();
/// assert_eq!(joined, Value::Str("ab".into()));
///
/// assert!(eval_binary(BinaryOperator::Add, &1.0.into(), &"b".into(), &plus).is_err());
/// ```
pub fn eval_binary(op: BinaryOperator,
                   left: &Value,
                   right: &Value,
                   token: &Token)
                   -> EvalResult<Value> {
    use BinaryOperator::{Add, And, Div, Equal, Less, Mul, Sub};

    match op {
        Add => match (left, right) {
            (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
            (Value::Str(a), Value::Str(b)) => Ok(Value::Str(format!("{a}{b}"))),
            _ => Err(mismatch(token, RuntimeErrorKind::OperandsMustBeStringsOrNumbers, left, right)),
        },
        Sub | Mul | Div | Less => {
            let (Value::Number(a), Value::Number(b)) = (left, right) else {
                return Err(mismatch(token, RuntimeErrorKind::OperandsMustBeNumbers, left, right));
            };
            Ok(eval_numeric(op, *a, *b))
        },
        Equal => Ok(Value::Bool(values_equal(left, right))),
        And => match (left, right) {
            (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(*a && *b)),
            _ => Err(mismatch(token, RuntimeErrorKind::OperandsMustBeBoolean, left, right)),
        },
    }
}

fn values_equal(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a == b || (a.is_nan() && b.is_nan()),
        _ => left == right,
    }
}

fn eval_numeric(op: BinaryOperator, a: f64, b: f64) -> Value {
    match op {
        BinaryOperator::Sub => Value::Number(a - b),
        BinaryOperator::Mul => Value::Number(a * b),
        BinaryOperator::Div => Value::Number(a / b),
        _ => Value::Bool(a < b),
    }
}

fn mismatch(token: &Token, kind: RuntimeErrorKind, left: &Value, right: &Value) -> RuntimeError {
    tracing::trace!(operator = %token.lexeme,
                    left = left.type_name(),
                    right = right.type_name(),
                    "operand type mismatch");
    RuntimeError::new(token, kind)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::token::TokenKind;

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, 1, 1)
    }

    #[test]
    fn arithmetic() {
        let t = op(TokenKind::Sub, "-");
        assert_eq!(eval_binary(BinaryOperator::Sub, &5.0.into(), &7.0.into(), &t).unwrap(),
                   Value::Number(-2.0));
        assert_eq!(eval_binary(BinaryOperator::Mul, &3.0.into(), &4.0.into(), &t).unwrap(),
                   Value::Number(12.0));
        assert_eq!(eval_binary(BinaryOperator::Div, &7.0.into(), &2.0.into(), &t).unwrap(),
                   Value::Number(3.5));
    }

    #[test]
    fn division_by_zero_is_ieee() {
        let t = op(TokenKind::Div, "/");
        let v = eval_binary(BinaryOperator::Div, &1.0.into(), &0.0.into(), &t).unwrap();
        assert_eq!(v, Value::Number(f64::INFINITY));
        let Value::Number(nan) = eval_binary(BinaryOperator::Div, &0.0.into(), &0.0.into(), &t).unwrap()
        else {
            panic!("expected a number");
        };
        assert!(nan.is_nan());
    }

    #[test]
    fn comparison_requires_numbers() {
        let t = op(TokenKind::Lt, "<");
        assert_eq!(eval_binary(BinaryOperator::Less, &1.0.into(), &2.0.into(), &t).unwrap(),
                   Value::Bool(true));
        let err = eval_binary(BinaryOperator::Less, &"a".into(), &"b".into(), &t).unwrap_err();
        assert!(matches!(err.kind, RuntimeErrorKind::OperandsMustBeNumbers));
        assert_eq!(err.token.lexeme, "<");
    }

    #[test]
    fn equality_is_total() {
        let t = op(TokenKind::Eq, "=");
        assert_eq!(eval_binary(BinaryOperator::Equal, &1.0.into(), &"1".into(), &t).unwrap(),
                   Value::Bool(false));
        assert_eq!(eval_binary(BinaryOperator::Equal, &"x".into(), &"x".into(), &t).unwrap(),
                   Value::Bool(true));
        assert_eq!(eval_binary(BinaryOperator::Equal, &true.into(), &true.into(), &t).unwrap(),
                   Value::Bool(true));
        assert_eq!(eval_binary(BinaryOperator::Equal, &Value::Null, &Value::Null, &t).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn nan_equals_itself() {
        let t = op(TokenKind::Eq, "=");
        let nan = Value::Number(f64::NAN);
        assert_eq!(eval_binary(BinaryOperator::Equal, &nan, &nan, &t).unwrap(), Value::Bool(true));
        assert_eq!(eval_binary(BinaryOperator::Equal, &nan, &1.0.into(), &t).unwrap(),
                   Value::Bool(false));
        assert_eq!(eval_binary(BinaryOperator::Equal, &0.0.into(), &(-0.0).into(), &t).unwrap(),
                   Value::Bool(true));
    }

    #[test]
    fn and_requires_booleans() {
        let t = op(TokenKind::And, "&");
        assert_eq!(eval_binary(BinaryOperator::And, &true.into(), &false.into(), &t).unwrap(),
                   Value::Bool(false));
        let err = eval_binary(BinaryOperator::And, &true.into(), &1.0.into(), &t).unwrap_err();
        assert!(matches!(err.kind, RuntimeErrorKind::OperandsMustBeBoolean));
    }

    #[test]
    fn mixed_addition_fails() {
        let t = op(TokenKind::Add, "+");
        let err = eval_binary(BinaryOperator::Add, &1.0.into(), &"b".into(), &t).unwrap_err();
        assert!(matches!(err.kind, RuntimeErrorKind::OperandsMustBeStringsOrNumbers));
    }
}
