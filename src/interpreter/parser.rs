/// Parser state and shared helpers.
///
/// Holds the [`Parser`](core::Parser) itself, its one-token lookahead,
/// diagnostics reporting and panic-mode resynchronization.
pub mod core;

/// Unary and primary expressions.
///
/// Handles logical negation, literals, variables and parenthesized
/// expressions.
pub mod unary;

/// Binary expressions and assignment.
///
/// Implements the precedence levels from assignment down to multiplication,
/// building left-associative chains of binary nodes.
pub mod binary;

/// Loop bodies.
///
/// Parses the statement sequence between `do` and `end`.
pub mod block;

/// Statement parsing.
///
/// Implements the statement forms: declarations, loops, `read`, `print`,
/// `assert` and expression statements.
pub mod statement;
