//! Read, render, write.

use anyhow::{Context, Result};
use std::io::{Read, Write};
use std::path::Path;

use jsgen_ast::Node;
use jsgen_emitter::{GeneratorOptions, Printer};

use crate::args::CliArgs;

/// Run one generation as described by `args`.
#[tracing::instrument(level = "debug", skip(args), fields(input = ?args.input_path()))]
pub fn run(args: &CliArgs) -> Result<()> {
    let options = load_options(args.options.as_deref())?;
    let text = read_input(args.input_path())?;
    let source = render(&text, options)?;
    write_output(args.output.as_deref(), &source)
}

/// Options from a JSON file, or the defaults when no file is given.
pub fn load_options(path: Option<&Path>) -> Result<GeneratorOptions> {
    let Some(path) = path else {
        return Ok(GeneratorOptions::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options file {}", path.display()))?;
    GeneratorOptions::from_json_str(&text)
        .with_context(|| format!("invalid options in {}", path.display()))
}

/// The ESTree document from `path`, or stdin for `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read input from stdin")?;
            Ok(text)
        }
    }
}

/// Parse `json` as an ESTree tree and render it.
pub fn render(json: &str, options: GeneratorOptions) -> Result<String> {
    let root = Node::from_json_str(json).context("failed to load syntax tree")?;
    tracing::debug!(kind = %root.kind(), "loaded syntax tree");
    let source = Printer::with_options(options)
        .print(&root)
        .context("failed to generate source")?;
    Ok(source)
}

/// Write `source` plus a trailing newline to `path`, or stdout for `None`.
pub fn write_output(path: Option<&Path>, source: &str) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, format!("{source}\n"))
            .with_context(|| format!("failed to write output file {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{source}").context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")
        }
    }
}
