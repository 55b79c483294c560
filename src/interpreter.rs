/// The token model shared by the lexer and the parser.
///
/// Declares [`TokenKind`](token::TokenKind) and [`Token`](token::Token),
/// which carries its lexeme, optional literal payload and source position.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a keyword, identifier, literal, operator or delimiter.
/// This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with kind and source
///   location.
/// - Skips whitespace as well as line and nested block comments.
/// - Reports lexical errors without stopping, leaving a `SCAN_ERROR` token in
///   place of the bad input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements of a program by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Reports syntax errors with location info and recovers at the next
///   statement boundary.
/// - Injects default initializers into bare declarations.
pub mod parser;
/// The variable store.
///
/// A single flat namespace plus the set of names currently controlling a
/// `for` loop.
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` enum: numbers, booleans, strings and the absent
/// value, together with conversion from literals and user input.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator walks the statements of a program in order, evaluates their
/// expressions and mutates the environment.
///
/// # Responsibilities
/// - Implements the semantics of every operator and statement.
/// - Drives `for` loops and protects their control variables.
/// - Performs `print` and `read` against injectable output and input.
/// - Reports runtime errors such as type mismatches or failed assertions.
pub mod evaluator;
