//! Generation errors.
//!
//! Every error aborts the whole render; callers never see partial output.

use std::fmt;

use jsgen_ast::NodeKind;

/// Where a node was found when it could not be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePosition {
    Statement,
    Expression,
    /// A function expression's name; only identifiers are accepted.
    FunctionName,
    /// A function parameter; only identifiers are accepted.
    Parameter,
    /// A function body; only blocks are accepted.
    FunctionBody,
    /// The property of a non-computed member access; only identifiers are
    /// accepted.
    PropertyName,
}

impl NodePosition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Statement => "statement",
            Self::Expression => "expression",
            Self::FunctionName => "function name",
            Self::Parameter => "parameter",
            Self::FunctionBody => "function body",
            Self::PropertyName => "property name",
        }
    }
}

impl fmt::Display for NodePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// No renderer for this kind at this position.
    UnsupportedNodeKind {
        kind: NodeKind,
        position: NodePosition,
    },
    /// A binary or logical operator missing from the precedence table.
    UnknownOperator { operator: String },
    /// The root handed to the generator is not statement-class.
    UnsupportedRoot { kind: NodeKind },
    /// The tree nests deeper than the emitter's recursion limit.
    NestingTooDeep { limit: u32 },
}

impl GenerateError {
    pub const fn unsupported(kind: NodeKind, position: NodePosition) -> Self {
        Self::UnsupportedNodeKind { kind, position }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedNodeKind { kind, position } => {
                write!(f, "unsupported node kind `{kind}` in {position} position")
            }
            Self::UnknownOperator { operator } => {
                write!(f, "unknown binary operator `{operator}`")
            }
            Self::UnsupportedRoot { kind } => {
                write!(f, "unsupported root node kind `{kind}`: expected a statement")
            }
            Self::NestingTooDeep { limit } => {
                write!(f, "syntax tree nests deeper than {limit} levels")
            }
        }
    }
}

impl std::error::Error for GenerateError {}

pub type Result<T, E = GenerateError> = std::result::Result<T, E>;
