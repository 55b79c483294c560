use std::fmt::Write;

use crate::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement},
    util::stack::ensure_sufficient_stack,
};

/// Renders statements as an indented tree, one node per line.
///
/// Nodes with children open with `(` and close with `)` on a line of their
/// own at the node's indentation; children sit `increment` spaces deeper.
///
/// # Example
/// ```
/// use minipl::{parse_source, printer::AstPrinter};
///
/// let program = parse_source("print 1 + x;").unwrap();
/// let tree = AstPrinter::new(2).statement(&program[0]);
///
/// assert_eq!(tree, "Print (\n  Binary [+] (\n    Literal (1)\n    Variable (x)\n  )\n)");
/// ```
#[derive(Debug, Clone)]
pub struct AstPrinter {
    indent:    usize,
    increment: usize,
}

impl AstPrinter {
    /// Creates a printer indenting each level by `increment` spaces.
    #[must_use]
    pub const fn new(increment: usize) -> Self {
        Self { indent: 0,
               increment }
    }

    /// Renders a whole program under a `Program` root node.
    pub fn program(&mut self, statements: &[Statement]) -> String {
        self.parenthesize("Program", statements, Self::statement)
    }

    /// Renders one statement.
    pub fn statement(&mut self, statement: &Statement) -> String {
        match statement {
            Statement::VarDecl { name,
                                 type_name,
                                 initializer, } => {
                let title = format!("Var [{} : {}]", name.lexeme, type_name.lexeme);
                self.parenthesize(&title, [initializer], Self::expression)
            },
            Statement::ForLoop { variable,
                                 start,
                                 end,
                                 body, } => {
                let start = self.expression(start);
                let end = self.expression(end);
                let title = format!("ForLoop [{} in {start} .. {end}]", variable.lexeme);
                self.parenthesize(&title, body, Self::statement)
            },
            Statement::Read { name } => format!("Read [{}]", name.lexeme),
            Statement::Print { expr, .. } => self.parenthesize("Print", [expr], Self::expression),
            Statement::Assert { expr, .. } => self.parenthesize("Assert", [expr], Self::expression),
            Statement::Expression { expr } => {
                self.parenthesize("Expression", [expr], Self::expression)
            },
        }
    }

    /// Renders one expression.
    pub fn expression(&mut self, expr: &Expr) -> String {
        match expr {
            Expr::Literal { value: LiteralValue::Str(s) } => format!("Literal (\"{s}\")"),
            Expr::Literal { value: LiteralValue::Number(n) } => format!("Literal ({n})"),
            Expr::Literal { value: LiteralValue::Bool(b) } => format!("Literal ({b})"),
            Expr::Grouping { expr } => self.parenthesize("Group", [&**expr], Self::expression),
            Expr::Unary { token, operand, .. } => {
                let title = format!("Unary [{}]", token.lexeme);
                self.parenthesize(&title, [&**operand], Self::expression)
            },
            Expr::Binary { left,
                           op,
                           right,
                           .. } => {
                let title = format!("Binary [{}]", operator_symbol(*op));
                self.parenthesize(&title, [&**left, &**right], Self::expression)
            },
            Expr::Variable { name } => format!("Variable ({})", name.lexeme),
            Expr::Assignment { name, value } => {
                let title = format!("Assignment [{}]", name.lexeme);
                self.parenthesize(&title, [&**value], Self::expression)
            },
        }
    }

    fn parenthesize<'a, T>(&mut self,
                           name: &str,
                           children: impl IntoIterator<Item = &'a T>,
                           render: fn(&mut Self, &T) -> String)
                           -> String
        where T: 'a
    {
        let mut out = format!("{name} (\n");
        self.indent += self.increment;

        for child in children {
            let rendered = ensure_sufficient_stack(|| render(self, child));
            let _ = writeln!(out, "{:width$}{rendered}", "", width = self.indent);
        }

        self.indent -= self.increment;
        let _ = write!(out, "{:width$})", "", width = self.indent);
        out
    }
}

const fn operator_symbol(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Sub => "-",
        BinaryOperator::Mul => "*",
        BinaryOperator::Div => "/",
        BinaryOperator::Less => "<",
        BinaryOperator::Equal => "=",
        BinaryOperator::And => "&",
    }
}
