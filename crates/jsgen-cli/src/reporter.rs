use colored::Colorize;

/// Formats a failed run for stderr.
pub struct Reporter {
    color: bool,
}

impl Reporter {
    pub fn new(color: bool) -> Self {
        Reporter { color }
    }

    /// `error: <outermost>` followed by one `caused by:` line per cause.
    pub fn render(&self, error: &anyhow::Error) -> String {
        let mut out = String::new();
        out.push_str(&self.label("error"));
        out.push_str(": ");
        out.push_str(&error.to_string());
        out.push('\n');
        for cause in error.chain().skip(1) {
            out.push_str("  ");
            out.push_str(&self.label("caused by"));
            out.push_str(": ");
            out.push_str(&cause.to_string());
            out.push('\n');
        }
        out
    }

    fn label(&self, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        if text == "error" {
            text.red().bold().to_string()
        } else {
            text.yellow().to_string()
        }
    }
}
