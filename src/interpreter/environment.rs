use std::collections::{HashMap, HashSet};

use crate::{
    error::{RuntimeError, RuntimeErrorKind},
    interpreter::{evaluator::core::EvalResult, token::Token, value::core::Value},
};

/// The variable store of one interpreter.
///
/// A single flat namespace lives for the whole lifetime of the interpreter:
/// there are no nested scopes and no shadowing. Names currently driving a
/// `for` loop are marked as control variables; while marked, only the loop
/// machinery may change them.
///
/// Every operation names its variable by an identifier token so errors can
/// point at the offending source location.
///
/// # Example
/// ```
/// use minipl::interpreter::{
///     environment::Environment,
///     token::{Token, TokenKind},
///     value::core::Value,
/// };
///
/// let i = Token::new(TokenKind::Ident, "i", 1, 1);
/// let mut env = Environment::new();
///
/// env.define(&i, Value::Number(0.0)).unwrap();
/// env.set_as_control(&i).unwrap();
/// assert!(env.assign(&i, Value::Number(5.0)).is_err());
///
/// env.control_assign(&i, Value::Number(1.0)).unwrap();
/// env.remove_from_control(&i).unwrap();
/// assert_eq!(env.get(&i).unwrap(), Value::Number(1.0));
/// ```
#[derive(Debug, Default)]
pub struct Environment {
    values:  HashMap<String, Value>,
    control: HashSet<String>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a new variable. Fails if the name is already defined.
    pub fn define(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if self.values.contains_key(&name.lexeme) {
            return Err(RuntimeError::new(name,
                                         RuntimeErrorKind::AlreadyDefined(name.lexeme.clone())));
        }
        tracing::trace!(name = %name.lexeme, %value, "define");
        self.values.insert(name.lexeme.clone(), value);
        Ok(())
    }

    /// Returns the current value of a variable. Fails if it is undefined.
    pub fn get(&self, name: &Token) -> EvalResult<Value> {
        self.values.get(&name.lexeme).cloned().ok_or_else(|| undefined(name))
    }

    /// Overwrites a variable through ordinary assignment.
    ///
    /// Fails if the name is undefined or is currently a control variable.
    pub fn assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if self.control.contains(&name.lexeme) {
            return Err(RuntimeError::new(name,
                                         RuntimeErrorKind::AssignmentToControlVariable(name.lexeme
                                                                                           .clone())));
        }
        self.overwrite(name, value)
    }

    /// Marks a defined variable as a control variable.
    ///
    /// Fails if the name is undefined or already marked.
    pub fn set_as_control(&mut self, name: &Token) -> EvalResult<()> {
        if !self.values.contains_key(&name.lexeme) {
            return Err(undefined(name));
        }
        if !self.control.insert(name.lexeme.clone()) {
            return Err(RuntimeError::new(name,
                                         RuntimeErrorKind::AlreadyControlVariable(name.lexeme
                                                                                      .clone())));
        }
        tracing::trace!(name = %name.lexeme, "control variable marked");
        Ok(())
    }

    /// Overwrites a control variable. This is the only way to change a
    /// variable while it is marked.
    ///
    /// Fails if the name is undefined or not a control variable.
    pub fn control_assign(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        if !self.values.contains_key(&name.lexeme) {
            return Err(undefined(name));
        }
        if !self.control.contains(&name.lexeme) {
            return Err(not_control(name));
        }
        self.overwrite(name, value)
    }

    /// Unmarks a control variable. The binding keeps its last value.
    ///
    /// Fails if the name is not currently a control variable.
    pub fn remove_from_control(&mut self, name: &Token) -> EvalResult<()> {
        if !self.control.remove(&name.lexeme) {
            return Err(not_control(name));
        }
        tracing::trace!(name = %name.lexeme, "control variable released");
        Ok(())
    }

    /// Looks a variable up by name without raising an error.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    /// Returns `true` if `name` is currently a control variable.
    #[must_use]
    pub fn is_control(&self, name: &str) -> bool {
        self.control.contains(name)
    }

    /// Returns `true` if no variable is defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn overwrite(&mut self, name: &Token, value: Value) -> EvalResult<()> {
        match self.values.get_mut(&name.lexeme) {
            Some(slot) => {
                tracing::trace!(name = %name.lexeme, %value, "assign");
                *slot = value;
                Ok(())
            },
            None => Err(undefined(name)),
        }
    }
}

fn undefined(name: &Token) -> RuntimeError {
    RuntimeError::new(name, RuntimeErrorKind::UndefinedVariable(name.lexeme.clone()))
}

fn not_control(name: &Token) -> RuntimeError {
    RuntimeError::new(name, RuntimeErrorKind::NotControlVariable(name.lexeme.clone()))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::interpreter::token::TokenKind;

    fn ident(name: &str) -> Token {
        Token::new(TokenKind::Ident, name, 1, 1)
    }

    #[test]
    fn define_twice_fails() {
        let mut env = Environment::new();
        env.define(&ident("x"), 1.0.into()).unwrap();
        let err = env.define(&ident("x"), 2.0.into()).unwrap_err();
        assert!(matches!(err.kind, RuntimeErrorKind::AlreadyDefined(ref n) if n == "x"));
        assert_eq!(env.get(&ident("x")).unwrap(), Value::Number(1.0));
    }

    #[test]
    fn undefined_names_are_rejected_everywhere() {
        let mut env = Environment::new();
        let x = ident("x");
        assert!(matches!(env.get(&x).unwrap_err().kind, RuntimeErrorKind::UndefinedVariable(_)));
        assert!(matches!(env.assign(&x, Value::Null).unwrap_err().kind,
                         RuntimeErrorKind::UndefinedVariable(_)));
        assert!(matches!(env.set_as_control(&x).unwrap_err().kind,
                         RuntimeErrorKind::UndefinedVariable(_)));
        assert!(matches!(env.control_assign(&x, Value::Null).unwrap_err().kind,
                         RuntimeErrorKind::UndefinedVariable(_)));
        assert!(env.is_empty());
    }

    #[test]
    fn control_variable_lifecycle() {
        let mut env = Environment::new();
        let i = ident("i");
        env.define(&i, 0.0.into()).unwrap();

        assert!(matches!(env.control_assign(&i, 1.0.into()).unwrap_err().kind,
                         RuntimeErrorKind::NotControlVariable(_)));

        env.set_as_control(&i).unwrap();
        assert!(env.is_control("i"));
        assert!(matches!(env.set_as_control(&i).unwrap_err().kind,
                         RuntimeErrorKind::AlreadyControlVariable(_)));
        assert!(matches!(env.assign(&i, 9.0.into()).unwrap_err().kind,
                         RuntimeErrorKind::AssignmentToControlVariable(_)));

        env.control_assign(&i, 3.0.into()).unwrap();
        env.remove_from_control(&i).unwrap();
        assert!(!env.is_control("i"));
        assert_eq!(env.lookup("i"), Some(&Value::Number(3.0)));

        env.assign(&i, 9.0.into()).unwrap();
        assert_eq!(env.get(&i).unwrap(), Value::Number(9.0));
    }

    #[test]
    fn releasing_an_unmarked_variable_fails() {
        let mut env = Environment::new();
        let i = ident("i");
        env.define(&i, 0.0.into()).unwrap();
        assert!(matches!(env.remove_from_control(&i).unwrap_err().kind,
                         RuntimeErrorKind::NotControlVariable(_)));
    }
}
