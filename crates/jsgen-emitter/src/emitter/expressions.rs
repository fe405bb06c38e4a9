use jsgen_ast::{
    ArrayExpression, AssignmentExpression, BinaryExpression, CallExpression,
    ConditionalExpression, FunctionExpression, LogicalExpression, MemberExpression,
    NewExpression, Node, SequenceExpression, UnaryExpression, UpdateExpression,
};

use super::Printer;
use super::helpers::{has_call_in_chain, is_bare_integer, is_word_operator};
use crate::error::{GenerateError, NodePosition, Result};
use crate::precedence::{Associativity, Precedence, binary_operator, is_assignment_operator};

impl Printer {
    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn emit_binary_expression(
        &mut self,
        expr: &BinaryExpression,
        context: Precedence,
    ) -> Result<()> {
        self.emit_binary_operation(&expr.operator, &expr.left, &expr.right, context)
    }

    pub(super) fn emit_logical_expression(
        &mut self,
        expr: &LogicalExpression,
        context: Precedence,
    ) -> Result<()> {
        self.emit_binary_operation(&expr.operator, &expr.left, &expr.right, context)
    }

    fn emit_binary_operation(
        &mut self,
        operator: &str,
        left: &Node,
        right: &Node,
        context: Precedence,
    ) -> Result<()> {
        let Some(info) = binary_operator(operator) else {
            tracing::debug!(operator, "operator missing from precedence table");
            return Err(GenerateError::UnknownOperator {
                operator: operator.to_string(),
            });
        };

        let (left_context, right_context) = info.precedence.operand_contexts(info.associativity);
        self.parenthesize(info.precedence, context, |this| {
            this.emit_expression(left, left_context)?;
            this.write_space();
            this.write(operator);
            this.write_space();
            this.emit_expression(right, right_context)
        })
    }

    pub(super) fn emit_assignment_expression(
        &mut self,
        expr: &AssignmentExpression,
        context: Precedence,
    ) -> Result<()> {
        if !is_assignment_operator(&expr.operator) {
            tracing::debug!(operator = %expr.operator, "not an assignment operator");
            return Err(GenerateError::UnknownOperator {
                operator: expr.operator.clone(),
            });
        }

        let (left_context, right_context) =
            Precedence::Assignment.operand_contexts(Associativity::Right);
        self.parenthesize(Precedence::Assignment, context, |this| {
            this.emit_expression(&expr.left, left_context)?;
            this.write_space();
            this.write(&expr.operator);
            this.write_space();
            this.emit_expression(&expr.right, right_context)
        })
    }

    pub(super) fn emit_conditional_expression(
        &mut self,
        expr: &ConditionalExpression,
        context: Precedence,
    ) -> Result<()> {
        self.parenthesize(Precedence::Conditional, context, |this| {
            this.emit_expression(&expr.test, Precedence::LogicalOR)?;
            this.write(" ? ");
            this.emit_expression(&expr.consequent, Precedence::Assignment)?;
            this.write(" : ");
            this.emit_expression(&expr.alternate, Precedence::Assignment)
        })
    }

    pub(super) fn emit_sequence_expression(
        &mut self,
        expr: &SequenceExpression,
        context: Precedence,
    ) -> Result<()> {
        self.parenthesize(Precedence::Sequence, context, |this| {
            this.emit_comma_separated(&expr.expressions, Precedence::Assignment)
        })
    }

    pub(super) fn emit_unary_expression(
        &mut self,
        expr: &UnaryExpression,
        context: Precedence,
    ) -> Result<()> {
        let operator = expr.operator.as_str();
        self.parenthesize(Precedence::Unary, context, |this| {
            this.write(operator);
            if is_word_operator(operator) {
                this.write_space();
            }
            let mark = this.writer.len();
            this.emit_expression(&expr.argument, Precedence::Unary)?;
            this.separate_sign(operator, mark);
            Ok(())
        })
    }

    pub(super) fn emit_update_expression(
        &mut self,
        expr: &UpdateExpression,
        context: Precedence,
    ) -> Result<()> {
        let operator = expr.operator.as_str();
        if expr.prefix {
            self.parenthesize(Precedence::Unary, context, |this| {
                this.write(operator);
                let mark = this.writer.len();
                this.emit_expression(&expr.argument, Precedence::Unary)?;
                this.separate_sign(operator, mark);
                Ok(())
            })
        } else {
            self.parenthesize(Precedence::Postfix, context, |this| {
                this.emit_expression(&expr.argument, Precedence::Postfix)?;
                this.write(operator);
                Ok(())
            })
        }
    }

    // =========================================================================
    // Member Access and Calls
    // =========================================================================

    pub(super) fn emit_member_expression(
        &mut self,
        expr: &MemberExpression,
        context: Precedence,
    ) -> Result<()> {
        self.parenthesize(Precedence::Member, context, |this| {
            let mark = this.writer.len();
            this.emit_expression(&expr.object, Precedence::Call)?;
            // `5.toString` would lex `5.` as a number
            if !expr.computed && is_bare_integer(this.writer.text_since(mark)) {
                this.writer.wrap_since(mark);
            }

            if expr.computed {
                this.write_char('[');
                this.emit_expression(&expr.property, Precedence::Sequence)?;
                this.write_char(']');
            } else {
                this.write_char('.');
                this.emit_binding_name(&expr.property, NodePosition::PropertyName)?;
            }
            Ok(())
        })
    }

    /// Calls bind tightly enough for every position they are emitted in, so
    /// they are never parenthesized against their context. The one position
    /// that cannot hold a bare call, a `new` callee, is handled there.
    pub(super) fn emit_call_expression(&mut self, expr: &CallExpression) -> Result<()> {
        self.emit_expression(&expr.callee, Precedence::Call)?;
        self.write_char('(');
        self.emit_comma_separated(&expr.arguments, Precedence::Assignment)?;
        self.write_char(')');
        Ok(())
    }

    pub(super) fn emit_new_expression(
        &mut self,
        expr: &NewExpression,
        context: Precedence,
    ) -> Result<()> {
        self.parenthesize(Precedence::New, context, |this| {
            this.write("new ");
            if has_call_in_chain(&expr.callee) {
                this.write_char('(');
                this.emit_expression(&expr.callee, Precedence::Sequence)?;
                this.write_char(')');
            } else {
                this.emit_expression(&expr.callee, Precedence::New)?;
            }
            this.write_char('(');
            this.emit_comma_separated(&expr.arguments, Precedence::Assignment)?;
            this.write_char(')');
            Ok(())
        })
    }

    // =========================================================================
    // Primary Expressions
    // =========================================================================

    #[tracing::instrument(level = "trace", skip(self, func), fields(param_count = func.params.len()))]
    pub(super) fn emit_function_expression(&mut self, func: &FunctionExpression) -> Result<()> {
        if func.is_async {
            self.write("async ");
        }
        self.write("function");
        if func.generator {
            self.write_char('*');
        }
        self.write_space();
        if let Some(id) = &func.id {
            self.emit_binding_name(id, NodePosition::FunctionName)?;
        }

        self.write_char('(');
        for (i, param) in func.params.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_binding_name(param, NodePosition::Parameter)?;
        }
        self.write(") ");

        if !matches!(func.body.as_ref(), Node::BlockStatement(_)) {
            return Err(self.unsupported(&func.body, NodePosition::FunctionBody));
        }
        self.emit_statement(&func.body)
    }

    /// Function names, parameters and dotted property names are bare
    /// identifiers.
    fn emit_binding_name(&mut self, node: &Node, position: NodePosition) -> Result<()> {
        match node {
            Node::Identifier(ident) => {
                self.write(&ident.name);
                Ok(())
            }
            other => Err(self.unsupported(other, position)),
        }
    }

    pub(super) fn emit_array_expression(&mut self, array: &ArrayExpression) -> Result<()> {
        self.write_char('[');
        for (i, element) in array.elements.iter().enumerate() {
            if i > 0 {
                self.write_char(',');
                if element.is_some() {
                    self.write_space();
                }
            }
            if let Some(element) = element {
                self.emit_expression(element, Precedence::Assignment)?;
            }
        }
        // a trailing hole needs its own comma: `[a,,]` has length 2
        if matches!(array.elements.last(), Some(None)) {
            self.write_char(',');
        }
        self.write_char(']');
        Ok(())
    }
}
