//! jsgen: render ESTree syntax trees back into JavaScript source.
//!
//! The work is split across two crates, re-exported here:
//!
//! - [`ast`] (`jsgen-ast`): the node model, builders, and ESTree JSON loading
//! - [`emitter`] (`jsgen-emitter`): the precedence table and the `Printer`
//!
//! ```
//! use jsgen::{Node, generate};
//!
//! let expr = Node::binary(
//!     Node::binary(Node::number(1.0), "+", Node::number(2.0)),
//!     "*",
//!     Node::number(3.0),
//! );
//! assert_eq!(generate(&Node::expr_stmt(expr)).unwrap(), "(1 + 2) * 3;");
//! ```

use std::fmt;

pub use jsgen_ast as ast;
pub use jsgen_emitter as emitter;

pub use jsgen_ast::{AstError, Node, NodeKind, VariableDeclarator, VariableKind};
pub use jsgen_emitter::{
    GenerateError, GeneratorOptions, NodePosition, Printer, generate, generate_with_options,
};

/// Failure of the JSON-to-source pipeline.
#[derive(Debug)]
pub enum Error {
    /// The document could not be loaded as a syntax tree.
    Ast(AstError),
    /// The tree loaded but could not be rendered.
    Generate(GenerateError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ast(err) => write!(f, "{err}"),
            Self::Generate(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ast(err) => err.source(),
            Self::Generate(err) => err.source(),
        }
    }
}

impl From<AstError> for Error {
    fn from(err: AstError) -> Self {
        Self::Ast(err)
    }
}

impl From<GenerateError> for Error {
    fn from(err: GenerateError) -> Self {
        Self::Generate(err)
    }
}

/// Load an ESTree JSON document and render it with default options.
pub fn generate_from_json(text: &str) -> Result<String, Error> {
    let root = Node::from_json_str(text)?;
    tracing::trace!(kind = %root.kind(), "rendering tree loaded from JSON");
    Ok(generate(&root)?)
}

/// Render an already-parsed ESTree JSON value.
pub fn generate_from_json_value(
    value: serde_json::Value,
    options: GeneratorOptions,
) -> Result<String, Error> {
    let root = Node::from_json_value(value)?;
    Ok(generate_with_options(&root, options)?)
}
