use jsgen_ast::{Literal, LiteralValue};

use super::Printer;
use crate::error::Result;
use crate::precedence::Precedence;

impl Printer {
    // =========================================================================
    // Literals
    // =========================================================================

    pub(super) fn emit_literal(&mut self, lit: &Literal, context: Precedence) -> Result<()> {
        match &lit.value {
            LiteralValue::Boolean(true) => self.write("true"),
            LiteralValue::Boolean(false) => self.write("false"),
            LiteralValue::Null => self.write("null"),
            LiteralValue::String(text) => self.emit_string_literal_text(text),
            LiteralValue::Number(value) => {
                let text = match &lit.raw {
                    Some(raw) => raw.clone(),
                    None => format_number(*value),
                };
                // A negative value reads back as unary minus applied to its
                // magnitude, so it binds like one.
                let own = if text.starts_with('-') {
                    Precedence::Unary
                } else {
                    Precedence::Primary
                };
                return self.parenthesize(own, context, |this| {
                    this.write(&text);
                    Ok(())
                });
            }
        }
        Ok(())
    }

    pub(super) fn emit_string_literal_text(&mut self, text: &str) {
        self.write_char('"');
        self.emit_escaped_string(text, '"');
        self.write_char('"');
    }

    pub(super) fn emit_escaped_string(&mut self, s: &str, quote_char: char) {
        for ch in s.chars() {
            match ch {
                '\n' => self.write("\\n"),
                '\r' => self.write("\\r"),
                '\t' => self.write("\\t"),
                '\u{8}' => self.write("\\b"),
                '\u{b}' => self.write("\\v"),
                '\u{c}' => self.write("\\f"),
                '\\' => self.write("\\\\"),
                c if c == quote_char => {
                    self.write_char('\\');
                    self.write_char(c);
                }
                // other control characters, and the line terminators that
                // older engines reject inside string literals
                c if c.is_control() || c == '\u{2028}' || c == '\u{2029}' => {
                    self.write(&format!("\\u{:04X}", c as u32));
                }
                c => self.write_char(c),
            }
        }
    }
}

/// JavaScript source text for a number value.
///
/// Integral values print without a fraction (`5`, not `5.0`); magnitudes of
/// `1e21` and up use exponent form as JavaScript's own `Number#toString` does.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value.abs() >= 1e21 {
        return format!("{value:e}");
    }
    format!("{value}")
}
