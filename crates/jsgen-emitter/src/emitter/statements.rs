use jsgen_ast::{
    BlockStatement, ExpressionStatement, Program, ReturnStatement, VariableDeclaration,
    VariableDeclarator,
};

use super::Printer;
use super::helpers::starts_with_function_keyword;
use crate::error::Result;
use crate::precedence::Precedence;

impl Printer {
    // =========================================================================
    // Statements
    // =========================================================================

    pub(super) fn emit_program(&mut self, program: &Program) -> Result<()> {
        for (i, stmt) in program.body.iter().enumerate() {
            if i > 0 {
                self.write_line();
            }
            self.emit_statement(stmt)?;
        }
        Ok(())
    }

    /// `{`, one statement per line, `}`. No indentation is applied; an empty
    /// block is `{\n}`.
    pub(super) fn emit_block(&mut self, block: &BlockStatement) -> Result<()> {
        self.write_char('{');
        self.write_line();
        for stmt in &block.body {
            self.emit_statement(stmt)?;
            self.write_line();
        }
        self.write_char('}');
        Ok(())
    }

    pub(super) fn emit_expression_statement(&mut self, stmt: &ExpressionStatement) -> Result<()> {
        let mark = self.writer.len();
        self.emit_expression(&stmt.expression, Precedence::Sequence)?;
        if starts_with_function_keyword(self.writer.text_since(mark)) {
            self.writer.wrap_since(mark);
        }
        self.write_semicolon();
        Ok(())
    }

    pub(super) fn emit_variable_declaration(&mut self, decl: &VariableDeclaration) -> Result<()> {
        self.write(decl.kind.as_str());
        self.write_space();
        for (i, declarator) in decl.declarations.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_variable_declarator(declarator)?;
        }
        self.write_semicolon();
        Ok(())
    }

    pub(super) fn emit_variable_declarator(&mut self, declarator: &VariableDeclarator) -> Result<()> {
        self.emit_expression(&declarator.id, Precedence::Assignment)?;
        if let Some(init) = &declarator.init {
            self.write(" = ");
            self.emit_expression(init, Precedence::Assignment)?;
        }
        Ok(())
    }

    pub(super) fn emit_return_statement(&mut self, stmt: &ReturnStatement) -> Result<()> {
        self.write("return");
        if let Some(argument) = &stmt.argument {
            self.write_space();
            self.emit_expression(argument, Precedence::Sequence)?;
        }
        self.write_semicolon();
        Ok(())
    }
}
