use std::fmt;

use crate::{ast::LiteralValue, util::escape::unescape};

/// Represents a runtime value in the interpreter.
///
/// No other runtime types exist. Strings are immutable once created; string
/// literals keep their escape sequences until the value is printed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// A numeric value (double precision floating-point).
    Number(f64),
    /// A boolean value (`true` or `false`).
    Bool(bool),
    /// A string value.
    Str(String),
    /// The absent value.
    #[default]
    Null,
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Number(n) => Self::Number(*n),
            LiteralValue::Str(s) => Self::Str(s.clone()),
            LiteralValue::Bool(b) => Self::Bool(*b),
        }
    }
}

impl Value {
    /// Interprets one whitespace-delimited word of user input.
    ///
    /// A finite number wins first, then the exact words `true` and `false`;
    /// anything else stays a string.
    ///
    /// # Example
    /// ```
    /// use minipl::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::from_input("12"), Value::Number(12.0));
    /// assert_eq!(Value::from_input("false"), Value::Bool(false));
    /// assert_eq!(Value::from_input("False"), Value::Str("False".into()));
    /// assert_eq!(Value::from_input("inf"), Value::Str("inf".into()));
    /// ```
    #[must_use]
    pub fn from_input(word: &str) -> Self {
        if let Ok(n) = word.parse::<f64>() {
            if n.is_finite() {
                return Self::Number(n);
            }
        }
        match word {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(word.to_string()),
        }
    }

    /// The name of the value's type, for logs and messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::Null => "null",
        }
    }

    /// The text `print` writes for this value: strings have their escape
    /// sequences resolved, everything else uses its canonical form.
    #[must_use]
    pub fn to_output(&self) -> String {
        match self {
            Self::Str(s) => unescape(s).into_owned(),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::Null => f.write_str("null"),
        }
    }
}
