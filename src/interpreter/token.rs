use std::fmt;

use crate::ast::LiteralValue;

/// The lexical category of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `var`
    Var,
    /// `for`
    For,
    /// `end`
    End,
    /// `in`
    In,
    /// `do`
    Do,
    /// `read`
    Read,
    /// `print`
    Print,
    /// `int`
    Int,
    /// `string`
    Str,
    /// `bool`
    Bool,
    /// `assert`
    Assert,

    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `<`
    Lt,
    /// `=`
    Eq,
    /// `&`
    And,
    /// `!`
    Not,

    /// Identifier; carries its name as a string literal.
    Ident,
    /// Integer literal; carries its numeric value.
    Integer,
    /// String literal; carries the raw contents between the quotes.
    String,
    /// `true` or `false`; carries the resolved boolean.
    Boolean,

    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `..`
    Range,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `:=`
    Assign,

    /// End of input. Every token sequence ends with exactly one.
    Eof,
    /// Stands in for input that could not be scanned.
    ScanError,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Var => "VAR",
            Self::For => "FOR",
            Self::End => "END",
            Self::In => "IN",
            Self::Do => "DO",
            Self::Read => "READ",
            Self::Print => "PRINT",
            Self::Int => "INT",
            Self::Str => "STR",
            Self::Bool => "BOOL",
            Self::Assert => "ASSERT",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mult => "MULT",
            Self::Div => "DIV",
            Self::Lt => "LT",
            Self::Eq => "EQ",
            Self::And => "AND",
            Self::Not => "NOT",
            Self::Ident => "IDENT",
            Self::Integer => "INTEGER",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Colon => "COLON",
            Self::Semicolon => "SEMICOLON",
            Self::Range => "RANGE",
            Self::LeftParen => "LEFT_PAREN",
            Self::RightParen => "RIGHT_PAREN",
            Self::Assign => "ASSIGN",
            Self::Eof => "EOF",
            Self::ScanError => "SCAN_ERROR",
        };
        f.write_str(name)
    }
}

/// A lexical token produced by the lexer.
///
/// Tokens are immutable once created. Line and column are 1-based and point
/// at the first character of the lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The lexical category.
    pub kind:    TokenKind,
    /// The raw source text of the token.
    pub lexeme:  String,
    /// The literal payload, if the kind carries one.
    pub literal: Option<LiteralValue>,
    /// Source line.
    pub line:    usize,
    /// Source column.
    pub column:  usize,
}

impl Token {
    /// Creates a token without a literal payload.
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self { kind,
               lexeme: lexeme.into(),
               literal: None,
               line,
               column }
    }

    /// Attaches a literal payload.
    #[must_use]
    pub fn with_literal(mut self, literal: LiteralValue) -> Self {
        self.literal = Some(literal);
        self
    }

    /// Creates the end-of-input token at the given position.
    #[must_use]
    pub fn eof(line: usize, column: usize) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }

    /// Returns `true` if this token can begin a statement. Panic-mode recovery
    /// stops discarding tokens at these.
    #[must_use]
    pub const fn starts_statement(&self) -> bool {
        matches!(self.kind,
                 TokenKind::Var
                 | TokenKind::Ident
                 | TokenKind::For
                 | TokenKind::Read
                 | TokenKind::Print
                 | TokenKind::Assert)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.literal {
            Some(LiteralValue::Number(n)) => write!(f, "{}({n})", self.kind),
            Some(LiteralValue::Bool(b)) => write!(f, "{}({b})", self.kind),
            Some(LiteralValue::Str(s)) if self.kind == TokenKind::String => {
                write!(f, "{}(\"{s}\")", self.kind)
            },
            _ => write!(f, "{}", self.kind),
        }
    }
}
