//! Printer: turns a syntax tree back into JavaScript source.
//!
//! Statements are emitted by `emit_statement`, expressions by
//! `emit_expression`, which carries the precedence the caller's position
//! requires. Each expression renderer compares its own precedence against
//! that context and parenthesizes itself when it binds too loosely.

mod expressions;
mod helpers;
mod literals;
mod statements;

use jsgen_ast::Node;

use crate::error::{GenerateError, NodePosition, Result};
use crate::options::GeneratorOptions;
use crate::precedence::Precedence;
use crate::source_writer::SourceWriter;

pub struct Printer {
    writer: SourceWriter,
    options: GeneratorOptions,
    /// Current recursion depth, checked against `MAX_EMIT_DEPTH`.
    depth: u32,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_options(GeneratorOptions::default())
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        Self {
            writer: SourceWriter::with_capacity(1024),
            options,
            depth: 0,
        }
    }

    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Render `root`, which must be a statement-class node.
    ///
    /// On failure nothing is returned: the partially written output is
    /// discarded and the printer is ready for the next call.
    #[tracing::instrument(level = "trace", skip(self, root), fields(kind = %root.kind()))]
    pub fn print(&mut self, root: &Node) -> Result<String> {
        let kind = root.kind();
        if !kind.is_statement() {
            tracing::debug!(%kind, "root is not a statement");
            return Err(GenerateError::UnsupportedRoot { kind });
        }

        self.depth = 0;
        match self.emit_statement(root) {
            Ok(()) => Ok(self.writer.take()),
            Err(err) => {
                tracing::debug!(error = %err, "generation aborted");
                self.writer.truncate(0);
                Err(err)
            }
        }
    }

    /// Render `root` with default options.
    pub fn emit_to_string(root: &Node) -> Result<String> {
        Self::new().print(root)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    pub(crate) fn emit_statement(&mut self, node: &Node) -> Result<()> {
        self.enter()?;
        let result = match node {
            Node::Program(program) => self.emit_program(program),
            Node::ExpressionStatement(stmt) => self.emit_expression_statement(stmt),
            Node::BlockStatement(block) => self.emit_block(block),
            Node::VariableDeclaration(decl) => self.emit_variable_declaration(decl),
            Node::ReturnStatement(stmt) => self.emit_return_statement(stmt),
            Node::EmptyStatement {} => {
                self.write(";");
                Ok(())
            }
            Node::BinaryExpression(_)
            | Node::LogicalExpression(_)
            | Node::AssignmentExpression(_)
            | Node::ConditionalExpression(_)
            | Node::SequenceExpression(_)
            | Node::UnaryExpression(_)
            | Node::UpdateExpression(_)
            | Node::MemberExpression(_)
            | Node::CallExpression(_)
            | Node::NewExpression(_)
            | Node::FunctionExpression(_)
            | Node::ArrayExpression(_)
            | Node::ThisExpression {}
            | Node::Identifier(_)
            | Node::Literal(_) => Err(self.unsupported(node, NodePosition::Statement)),
        };
        self.leave();
        result
    }

    pub(crate) fn emit_expression(&mut self, node: &Node, context: Precedence) -> Result<()> {
        self.enter()?;
        tracing::trace!(kind = %node.kind(), ?context, "emit expression");
        let result = match node {
            Node::BinaryExpression(expr) => self.emit_binary_expression(expr, context),
            Node::LogicalExpression(expr) => self.emit_logical_expression(expr, context),
            Node::AssignmentExpression(expr) => self.emit_assignment_expression(expr, context),
            Node::ConditionalExpression(expr) => self.emit_conditional_expression(expr, context),
            Node::SequenceExpression(expr) => self.emit_sequence_expression(expr, context),
            Node::UnaryExpression(expr) => self.emit_unary_expression(expr, context),
            Node::UpdateExpression(expr) => self.emit_update_expression(expr, context),
            Node::MemberExpression(expr) => self.emit_member_expression(expr, context),
            Node::CallExpression(expr) => self.emit_call_expression(expr),
            Node::NewExpression(expr) => self.emit_new_expression(expr, context),
            Node::FunctionExpression(func) => self.emit_function_expression(func),
            Node::ArrayExpression(array) => self.emit_array_expression(array),
            Node::ThisExpression {} => {
                self.write("this");
                Ok(())
            }
            Node::Identifier(ident) => {
                self.write(&ident.name);
                Ok(())
            }
            Node::Literal(lit) => self.emit_literal(lit, context),
            Node::Program(_)
            | Node::ExpressionStatement(_)
            | Node::BlockStatement(_)
            | Node::VariableDeclaration(_)
            | Node::ReturnStatement(_)
            | Node::EmptyStatement {} => Err(self.unsupported(node, NodePosition::Expression)),
        };
        self.leave();
        result
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Render `root` with default options.
pub fn generate(root: &Node) -> Result<String> {
    Printer::emit_to_string(root)
}

/// Render `root` with the given options.
pub fn generate_with_options(root: &Node, options: GeneratorOptions) -> Result<String> {
    Printer::with_options(options).print(root)
}
