use logos::{FilterResult, Logos, Skip};

use crate::{
    ast::LiteralValue,
    error::{Diagnostic, Diagnostics},
    interpreter::token::{Token, TokenKind},
    util::position::LineIndex,
};

/// Why a stretch of input could not be turned into a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexErrorKind {
    /// A character that starts no token, including a lone `.`.
    #[default]
    UnexpectedCharacter,
    /// A string literal missing its closing quote on the same line.
    UnterminatedString,
    /// A block comment missing its closing `*/`.
    UnterminatedComment,
}

/// The raw token shapes recognized by the generated scanner.
///
/// Comments never reach the token stream: line comments are skipped, block
/// comments are skipped once their nesting closes.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = LexErrorKind)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    /// `var`
    #[token("var")]
    Var,
    /// `for`
    #[token("for")]
    For,
    /// `end`
    #[token("end")]
    End,
    /// `in`
    #[token("in")]
    In,
    /// `do`
    #[token("do")]
    Do,
    /// `read`
    #[token("read")]
    Read,
    /// `print`
    #[token("print")]
    Print,
    /// `int`
    #[token("int")]
    Int,
    /// `string`
    #[token("string")]
    Str,
    /// `bool`
    #[token("bool")]
    Bool,
    /// `assert`
    #[token("assert")]
    Assert,
    /// Boolean literal tokens, `true` or `false`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Boolean(bool),
    /// Identifier tokens such as `x` or `loop_count2`.
    #[regex(r"[a-zA-Z][a-zA-Z0-9_]*")]
    Ident,
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_number)]
    Integer(f64),
    /// String literal tokens; the payload is the raw text between the quotes.
    #[token("\"", lex_string)]
    String(String),
    /// `// Comments.`
    #[token("//", line_comment)]
    LineComment,
    /// `/* Block comments, /* nested */ ones too. */`
    #[token("/*", block_comment)]
    BlockComment,
    /// `+`
    #[token("+")]
    Add,
    /// `-`
    #[token("-")]
    Sub,
    /// `*`
    #[token("*")]
    Mult,
    /// `/`
    #[token("/")]
    Div,
    /// `<`
    #[token("<")]
    Lt,
    /// `=`
    #[token("=")]
    Eq,
    /// `&`
    #[token("&")]
    And,
    /// `!`
    #[token("!")]
    Not,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `(`
    #[token("(")]
    LeftParen,
    /// `)`
    #[token(")")]
    RightParen,
    /// `..`
    #[token("..")]
    Range,
    /// `:=`
    #[token(":=")]
    Assign,
    /// `:`
    #[token(":")]
    Colon,
}

/// Parses a boolean literal from the current token slice.
fn parse_bool(lex: &logos::Lexer<RawToken>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// Parses a run of digits. Every digit run is a valid `f64`, very long ones
/// round to the nearest representable value.
fn parse_number(lex: &logos::Lexer<RawToken>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Consumes a string literal after its opening quote.
///
/// A backslash protects the character after it, so `\"` does not close the
/// literal. Escapes are kept verbatim. Reaching a newline or the end of input
/// before the closing quote makes the literal unterminated; the newline itself
/// is left for the whitespace skipper.
fn lex_string(lex: &mut logos::Lexer<RawToken>) -> Result<String, LexErrorKind> {
    let rest = lex.remainder();
    let mut chars = rest.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                lex.bump(i + 1);
                return Ok(rest[..i].to_string());
            },
            '\n' => {
                lex.bump(i);
                return Err(LexErrorKind::UnterminatedString);
            },
            '\\' => {
                if let Some((_, '\n')) = chars.clone().next() {
                    lex.bump(i + 1);
                    return Err(LexErrorKind::UnterminatedString);
                }
                chars.next();
            },
            _ => {},
        }
    }

    lex.bump(rest.len());
    Err(LexErrorKind::UnterminatedString)
}

/// Skips a line comment up to, not including, the newline.
fn line_comment(lex: &mut logos::Lexer<RawToken>) -> Skip {
    let rest = lex.remainder();
    lex.bump(rest.find('\n').unwrap_or(rest.len()));
    Skip
}

/// Skips a block comment after its opening `/*`, honoring nesting.
///
/// Each inner `/*` has to be closed by its own `*/` before the outer comment
/// can end.
fn block_comment(lex: &mut logos::Lexer<RawToken>) -> FilterResult<(), LexErrorKind> {
    let rest = lex.remainder();
    let bytes = rest.as_bytes();
    let mut depth = 1usize;
    let mut i = 0;

    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'/', Some(b'*')) => {
                depth += 1;
                i += 2;
            },
            (b'*', Some(b'/')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    lex.bump(i);
                    return FilterResult::Skip;
                }
            },
            _ => i += 1,
        }
    }

    lex.bump(rest.len());
    FilterResult::Error(LexErrorKind::UnterminatedComment)
}

/// Turns source text into [`Token`]s, one at a time.
///
/// The lexer is an iterator: tokens come out in source order and the sequence
/// always ends with exactly one [`TokenKind::Eof`]. Lexical errors are
/// reported to the shared [`Diagnostics`] and replaced by a
/// [`TokenKind::ScanError`] token, after which scanning carries on.
///
/// # Example
/// ```
/// use minipl::{
///     error::Diagnostics,
///     interpreter::{lexer::Lexer, token::TokenKind},
/// };
///
/// let diagnostics = Diagnostics::new();
/// let kinds: Vec<TokenKind> = Lexer::new("read x;", &diagnostics).map(|t| t.kind).collect();
///
/// assert_eq!(kinds,
///            [TokenKind::Read, TokenKind::Ident, TokenKind::Semicolon, TokenKind::Eof]);
/// assert!(!diagnostics.had_error());
/// ```
pub struct Lexer<'src, 'd> {
    source:      &'src str,
    raw:         logos::Lexer<'src, RawToken>,
    lines:       LineIndex,
    diagnostics: &'d Diagnostics,
    finished:    bool,
}

impl<'src, 'd> Lexer<'src, 'd> {
    /// Creates a lexer over `source` reporting into `diagnostics`.
    #[must_use]
    pub fn new(source: &'src str, diagnostics: &'d Diagnostics) -> Self {
        Self { source,
               raw: RawToken::lexer(source),
               lines: LineIndex::new(source),
               diagnostics,
               finished: false }
    }

    fn token(&self, kind: TokenKind, start: usize) -> Token {
        let (line, column) = self.lines.position(self.source, start);
        Token::new(kind, self.raw.slice(), line, column)
    }

    fn convert(&self, raw: RawToken, start: usize) -> Token {
        let kind = match raw {
            RawToken::Var => TokenKind::Var,
            RawToken::For => TokenKind::For,
            RawToken::End => TokenKind::End,
            RawToken::In => TokenKind::In,
            RawToken::Do => TokenKind::Do,
            RawToken::Read => TokenKind::Read,
            RawToken::Print => TokenKind::Print,
            RawToken::Int => TokenKind::Int,
            RawToken::Str => TokenKind::Str,
            RawToken::Bool => TokenKind::Bool,
            RawToken::Assert => TokenKind::Assert,
            RawToken::Boolean(b) => {
                return self.token(TokenKind::Boolean, start)
                           .with_literal(LiteralValue::Bool(b));
            },
            RawToken::Ident => {
                let name = LiteralValue::Str(self.raw.slice().to_string());
                return self.token(TokenKind::Ident, start).with_literal(name);
            },
            RawToken::Integer(n) => {
                return self.token(TokenKind::Integer, start)
                           .with_literal(LiteralValue::Number(n));
            },
            RawToken::String(s) => {
                return self.token(TokenKind::String, start)
                           .with_literal(LiteralValue::Str(s));
            },
            RawToken::Add => TokenKind::Add,
            RawToken::Sub => TokenKind::Sub,
            RawToken::Mult => TokenKind::Mult,
            RawToken::Div => TokenKind::Div,
            RawToken::Lt => TokenKind::Lt,
            RawToken::Eq => TokenKind::Eq,
            RawToken::And => TokenKind::And,
            RawToken::Not => TokenKind::Not,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LeftParen => TokenKind::LeftParen,
            RawToken::RightParen => TokenKind::RightParen,
            RawToken::Range => TokenKind::Range,
            RawToken::Assign => TokenKind::Assign,
            RawToken::Colon => TokenKind::Colon,
            // Both comment callbacks skip; logos never yields these.
            RawToken::LineComment | RawToken::BlockComment => TokenKind::ScanError,
        };
        self.token(kind, start)
    }

    fn scan_error(&self, kind: LexErrorKind, start: usize) -> Token {
        let token = self.token(TokenKind::ScanError, start);
        let message = match kind {
            LexErrorKind::UnexpectedCharacter => {
                let c = self.raw.slice().chars().next().unwrap_or_default();
                format!("Unexpected character '{c}'.")
            },
            LexErrorKind::UnterminatedString => "Unterminated string.".to_string(),
            LexErrorKind::UnterminatedComment => "Unterminated multiline comment.".to_string(),
        };
        self.diagnostics.report(Diagnostic::Lexical { line: token.line,
                                                      column: token.column,
                                                      message });
        token
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        match self.raw.next() {
            Some(Ok(raw)) => {
                let start = self.raw.span().start;
                Some(self.convert(raw, start))
            },
            Some(Err(kind)) => {
                let start = self.raw.span().start;
                Some(self.scan_error(kind, start))
            },
            None => {
                self.finished = true;
                let (line, column) = self.lines.position(self.source, self.source.len());
                Some(Token::eof(line, column))
            },
        }
    }
}

/// Scans all of `source` eagerly.
///
/// The returned sequence always ends with exactly one EOF token.
///
/// # Example
/// ```
/// use minipl::{error::Diagnostics, interpreter::lexer::scan};
///
/// let diagnostics = Diagnostics::new();
/// let tokens = scan("var x : int := 1 + 2; print x;", &diagnostics);
/// let kinds: Vec<String> = tokens.iter().map(ToString::to_string).collect();
///
/// assert_eq!(kinds.join(" "),
///            "VAR IDENT COLON INT ASSIGN INTEGER(1) ADD INTEGER(2) SEMICOLON PRINT IDENT \
///             SEMICOLON EOF");
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn scan(source: &str, diagnostics: &Diagnostics) -> Vec<Token> {
    let tokens: Vec<Token> = Lexer::new(source, diagnostics).collect();
    tracing::debug!(count = tokens.len(), "scanned tokens");
    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn kinds(source: &str) -> (Vec<TokenKind>, Diagnostics) {
        let diagnostics = Diagnostics::new();
        let kinds = scan(source, &diagnostics).into_iter().map(|t| t.kind).collect();
        (kinds, diagnostics)
    }

    #[test]
    fn declaration_and_print() {
        use TokenKind::*;

        let (kinds, diagnostics) = kinds("var x : int := 1 + 2; print x;");
        assert_eq!(kinds,
                   [Var, Ident, Colon, Int, Assign, Integer, Add, Integer, Semicolon, Print,
                    Ident, Semicolon, Eof]);
        assert!(!diagnostics.had_error());
    }

    #[test]
    fn literals_carry_payloads() {
        let diagnostics = Diagnostics::new();
        let tokens = scan(r#"42 "a\"b" true x1_y"#, &diagnostics);

        assert_eq!(tokens[0].literal, Some(LiteralValue::Number(42.0)));
        assert_eq!(tokens[1].literal, Some(LiteralValue::Str(r#"a\"b"#.to_string())));
        assert_eq!(tokens[1].lexeme, r#""a\"b""#);
        assert_eq!(tokens[2].kind, TokenKind::Boolean);
        assert_eq!(tokens[2].literal, Some(LiteralValue::Bool(true)));
        assert_eq!(tokens[3].literal, Some(LiteralValue::Str("x1_y".to_string())));
    }

    #[test]
    fn keywords_have_no_payload() {
        let diagnostics = Diagnostics::new();
        let tokens = scan("string for", &diagnostics);
        assert_eq!(tokens[0].kind, TokenKind::Str);
        assert_eq!(tokens[0].literal, None);
        assert_eq!(tokens[1].kind, TokenKind::For);
    }

    #[test]
    fn keyword_prefix_is_an_identifier() {
        let (kinds, _) = kinds("variable ending");
        assert_eq!(kinds, [TokenKind::Ident, TokenKind::Ident, TokenKind::Eof]);
    }

    #[test]
    fn range_assign_and_colon() {
        use TokenKind::*;

        let (kinds, _) = kinds("1..3 : :=");
        assert_eq!(kinds, [Integer, Range, Integer, Colon, Assign, Eof]);
    }

    #[test]
    fn lone_dot_is_an_error() {
        let (kinds, diagnostics) = kinds("1 . 2");
        assert_eq!(kinds,
                   [TokenKind::Integer, TokenKind::ScanError, TokenKind::Integer, TokenKind::Eof]);
        assert_eq!(diagnostics.snapshot(),
                   [Diagnostic::Lexical { line:    1,
                                          column:  3,
                                          message: "Unexpected character '.'.".to_string(), }]);
    }

    #[test]
    fn comments_are_skipped() {
        let (kinds, diagnostics) = kinds("1 // one\n/* two /* three */ still */ 4 / 2");
        assert_eq!(kinds,
                   [TokenKind::Integer,
                    TokenKind::Integer,
                    TokenKind::Div,
                    TokenKind::Integer,
                    TokenKind::Eof]);
        assert!(!diagnostics.had_error());
    }

    #[test]
    fn unterminated_nested_comment() {
        let (kinds, diagnostics) = kinds("1 /* outer /* inner */");
        assert_eq!(kinds, [TokenKind::Integer, TokenKind::ScanError, TokenKind::Eof]);
        assert_eq!(diagnostics.snapshot()[0].message(), "Unterminated multiline comment.");
    }

    #[test]
    fn unterminated_string_stops_at_newline() {
        let (kinds, diagnostics) = kinds("\"abc\nprint");
        assert_eq!(kinds, [TokenKind::ScanError, TokenKind::Print, TokenKind::Eof]);
        assert_eq!(diagnostics.snapshot()[0].message(), "Unterminated string.");
    }

    #[test]
    fn errors_do_not_stop_scanning() {
        let (kinds, diagnostics) = kinds("? x # ;");
        assert_eq!(kinds,
                   [TokenKind::ScanError,
                    TokenKind::Ident,
                    TokenKind::ScanError,
                    TokenKind::Semicolon,
                    TokenKind::Eof]);
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let diagnostics = Diagnostics::new();
        let tokens = scan("var x\n  : int;", &diagnostics);
        let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, [(1, 1), (1, 5), (2, 3), (2, 5), (2, 8), (2, 9)]);
    }

    #[test]
    fn exactly_one_eof() {
        let diagnostics = Diagnostics::new();
        let mut lexer = Lexer::new("", &diagnostics);
        assert_eq!(lexer.next().map(|t| t.kind), Some(TokenKind::Eof));
        assert_eq!(lexer.next(), None);
    }
}
