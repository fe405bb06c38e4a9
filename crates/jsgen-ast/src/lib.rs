//! ESTree node model for the jsgen code generator.
//!
//! This crate provides the input side of code generation:
//! - The closed `Node` enum with one record type per node kind
//! - `NodeKind`, the discriminant, and the statement/expression split
//! - Builder helpers for constructing trees in code and tests
//! - ESTree JSON loading with unknown-kind reporting (`AstError`)
//!
//! Trees are produced by an external parser or by the builders and are never
//! mutated once constructed.

// Node records and the `Node` enum
pub mod node;
pub use node::{
    ArrayExpression, AssignmentExpression, BinaryExpression, BlockStatement, CallExpression,
    ConditionalExpression, ExpressionStatement, FunctionExpression, Identifier, Literal,
    LiteralValue, LogicalExpression, MemberExpression, NewExpression, Node, Program,
    ReturnStatement, SequenceExpression, UnaryExpression, UpdateExpression, VariableDeclaration,
    VariableDeclarator, VariableKind,
};

// Discriminants
pub mod kind;
pub use kind::NodeKind;

// Builder helpers for node construction
pub mod builders;

// ESTree JSON input
pub mod json;
pub use json::AstError;
