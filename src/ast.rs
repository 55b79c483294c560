use crate::interpreter::token::{Token, TokenKind};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the constant values that can appear directly in
/// source code: integer literals (stored as `f64`), string literals with their
/// escape sequences still unresolved, and booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A numeric literal such as `42`.
    Number(f64),
    /// A string literal, without the surrounding quotes.
    Str(String),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

/// The declared type of a `var` statement.
///
/// Types are not checked statically; the declared type only decides which
/// default value an uninitialized declaration receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeName {
    /// `int`
    Int,
    /// `string`
    String,
    /// `bool`
    Bool,
}

impl TypeName {
    /// Maps a type keyword token kind to its type, if it is one.
    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Int => Some(Self::Int),
            TokenKind::Str => Some(Self::String),
            TokenKind::Bool => Some(Self::Bool),
            _ => None,
        }
    }

    /// The literal an uninitialized variable of this type starts with.
    ///
    /// # Example
    /// ```
    /// use minipl::ast::{LiteralValue, TypeName};
    ///
    /// assert_eq!(TypeName::Int.default_literal(), LiteralValue::Number(0.0));
    /// assert_eq!(TypeName::String.default_literal(), LiteralValue::Str(String::new()));
    /// assert_eq!(TypeName::Bool.default_literal(), LiteralValue::Bool(false));
    /// ```
    #[must_use]
    pub fn default_literal(self) -> LiteralValue {
        match self {
            Self::Int => LiteralValue::Number(0.0),
            Self::String => LiteralValue::Str(String::new()),
            Self::Bool => LiteralValue::Bool(false),
        }
    }
}

/// Binary operators, from `+` to `&`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `<`
    Less,
    /// `=`
    Equal,
    /// `&`
    And,
}

/// Unary operators. The language only has logical negation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
    /// `!`
    Not,
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Expressions form an immutable tree owned strictly from parent to child.
/// Operator nodes keep the operator token so runtime errors can point at it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A constant value.
    Literal {
        /// The constant value.
        value: LiteralValue,
    },
    /// A parenthesized expression.
    Grouping {
        /// The wrapped expression.
        expr: Box<Self>,
    },
    /// A unary operation, e.g. `!done`.
    Unary {
        /// The operator.
        op:      UnaryOperator,
        /// The operator token.
        token:   Token,
        /// The operand expression.
        operand: Box<Self>,
    },
    /// A binary operation, e.g. `a + b`.
    Binary {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// The operator token.
        token: Token,
        /// Right operand.
        right: Box<Self>,
    },
    /// Reference to a variable by name.
    Variable {
        /// The identifier token.
        name: Token,
    },
    /// Assignment to an existing variable, e.g. `x := x + 1`.
    Assignment {
        /// The identifier token of the target.
        name:  Token,
        /// The assigned expression.
        value: Box<Self>,
    },
}

impl Expr {
    /// Creates a literal expression.
    #[must_use]
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal { value: value.into() }
    }
}

/// A single statement. A program is an ordered sequence of statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `var x : int := 1;` The initializer is always present; the parser
    /// injects the type's default literal when the source omits it.
    VarDecl {
        /// The declared name.
        name:        Token,
        /// The type keyword token.
        type_name:   Token,
        /// The initial value.
        initializer: Expr,
    },
    /// `for i in a..b do ... end for;`
    ForLoop {
        /// The control variable.
        variable: Token,
        /// Lower bound, inclusive.
        start:    Expr,
        /// Upper bound, inclusive.
        end:      Expr,
        /// The loop body, in execution order.
        body:     Vec<Self>,
    },
    /// `read x;`
    Read {
        /// The variable receiving the input.
        name: Token,
    },
    /// `print expr;`
    Print {
        /// The `print` keyword.
        keyword: Token,
        /// The printed expression.
        expr:    Expr,
    },
    /// `assert(expr);`
    Assert {
        /// The `assert` keyword.
        keyword: Token,
        /// The asserted condition.
        expr:    Expr,
    },
    /// An expression evaluated for its side effect, e.g. `x := 3;`.
    Expression {
        /// The expression.
        expr: Expr,
    },
}
