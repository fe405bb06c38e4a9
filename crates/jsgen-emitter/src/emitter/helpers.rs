use jsgen_ast::Node;

use super::Printer;
use crate::error::{GenerateError, NodePosition, Result};
use crate::limits::MAX_EMIT_DEPTH;
use crate::precedence::Precedence;

impl Printer {
    // =========================================================================
    // Output Helpers (delegate to SourceWriter)
    // =========================================================================

    pub(super) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(super) fn write_char(&mut self, ch: char) {
        self.writer.write_char(ch);
    }

    pub(super) fn write_space(&mut self) {
        self.writer.write_space();
    }

    pub(super) fn write_line(&mut self) {
        self.writer.write_line();
    }

    pub(super) fn write_semicolon(&mut self) {
        self.writer.write_char(';');
    }

    // =========================================================================
    // Recursion Guard
    // =========================================================================

    pub(super) fn enter(&mut self) -> Result<()> {
        if self.depth >= MAX_EMIT_DEPTH {
            tracing::debug!(limit = MAX_EMIT_DEPTH, "nesting limit reached");
            return Err(GenerateError::NestingTooDeep {
                limit: MAX_EMIT_DEPTH,
            });
        }
        self.depth += 1;
        Ok(())
    }

    pub(super) fn leave(&mut self) {
        self.depth -= 1;
    }

    pub(super) fn unsupported(&self, node: &Node, position: NodePosition) -> GenerateError {
        let kind = node.kind();
        tracing::debug!(%kind, %position, "no renderer for node");
        GenerateError::unsupported(kind, position)
    }

    // =========================================================================
    // Emitter Helpers
    // =========================================================================

    /// Emit `body`, wrapped in parentheses when an expression of precedence
    /// `own` cannot stand unparenthesized where `context` is required.
    pub(super) fn parenthesize(
        &mut self,
        own: Precedence,
        context: Precedence,
        body: impl FnOnce(&mut Self) -> Result<()>,
    ) -> Result<()> {
        let needs_parens = own.needs_parens_in(context);
        if needs_parens {
            self.write_char('(');
        }
        body(self)?;
        if needs_parens {
            self.write_char(')');
        }
        Ok(())
    }

    pub(super) fn emit_comma_separated(
        &mut self,
        nodes: &[Node],
        context: Precedence,
    ) -> Result<()> {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.emit_expression(node, context)?;
        }
        Ok(())
    }

    /// After emitting an operand at `mark` right behind a `+`/`-` operator,
    /// separate the two if they would otherwise fuse into `++`/`--`.
    pub(super) fn separate_sign(&mut self, operator: &str, mark: usize) {
        let Some(last) = operator.chars().last() else {
            return;
        };
        if matches!(last, '+' | '-') && self.writer.text_since(mark).starts_with(last) {
            self.writer.insert_space_at(mark);
        }
    }
}

/// `typeof`, `void`, `delete`: operators that need a space before their
/// operand.
pub(super) fn is_word_operator(operator: &str) -> bool {
    !operator.is_empty() && operator.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Decimal integer text such as `5`, where a following `.` would be read as
/// a decimal point.
pub(super) fn is_bare_integer(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

/// Whether statement text begins with the `function` keyword (optionally
/// `async`), which would make an expression statement parse as a declaration.
pub(super) fn starts_with_function_keyword(text: &str) -> bool {
    let text = text.strip_prefix("async ").unwrap_or(text);
    text.strip_prefix("function")
        .is_some_and(|rest| rest.chars().next().is_none_or(|c| !is_identifier_part(c)))
}

fn is_identifier_part(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Whether a `new` callee has a call on its object chain (`f()`, `a.b().c`),
/// which would otherwise be taken as the constructor's own argument list.
pub(super) fn has_call_in_chain(node: &Node) -> bool {
    match node {
        Node::CallExpression(_) => true,
        Node::MemberExpression(member) => has_call_in_chain(&member.object),
        _ => false,
    }
}
