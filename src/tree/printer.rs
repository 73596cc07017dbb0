//! AST tree printer.
//!
//! Renders a [`Program`] pre-order, one node per line, children one level deeper than their parent.

use f77_syntax::ast::{Assignment, CountedLoop, Declaration, Expr, Program, Statement};

use super::config::TreeConfig;
use super::writer::TreeWriter;

/// Prints an AST as an indented outline.
pub struct TreePrinter {
    writer: TreeWriter,
}

impl TreePrinter {
    pub fn new(config: TreeConfig) -> Self {
        Self {
            writer: TreeWriter::new(config),
        }
    }

    /// Render `program` and return the text (every line ends with `\n`).
    pub fn print(mut self, program: &Program) -> String {
        self.print_program(program);
        self.writer.finish()
    }

    fn print_program(&mut self, program: &Program) {
        self.writer.writeln(&format!("Program {}", program.name));
        self.writer.indent();
        for statement in &program.statements {
            self.print_statement(statement);
        }
        self.writer.dedent();
    }

    fn print_statement(&mut self, statement: &Statement) {
        match statement {
            Statement::Declaration(Declaration { kind, names }) => {
                self.writer.writeln(&format!("Decl {kind}: {}", names.join(", ")));
            }
            Statement::Assignment(Assignment { target, value }) => {
                self.writer.writeln(&format!("Assign {target} ="));
                self.children(&[value]);
            }
            Statement::CountedLoop(CountedLoop { variable, start, end }) => {
                self.writer.writeln(&format!("Do {variable} ="));
                self.children(&[start, end]);
            }
        }
    }

    fn print_expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Binary(left, op, right) => {
                self.writer.writeln(&format!("BinOp {op}"));
                self.children(&[&**left, &**right]);
            }
            Expr::Power(base, exponent) => {
                self.writer.writeln("Power **");
                self.children(&[&**base, &**exponent]);
            }
            Expr::Number(text) => self.writer.writeln(&format!("Number {text}")),
            Expr::Variable(name) => self.writer.writeln(&format!("Ident {name}")),
        }
    }

    fn children(&mut self, exprs: &[&Expr]) {
        self.writer.indent();
        for expr in exprs {
            self.print_expr(expr);
        }
        self.writer.dedent();
    }
}
