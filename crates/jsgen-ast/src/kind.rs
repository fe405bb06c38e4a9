//! Node discriminants.
//!
//! `NodeKind` mirrors the ESTree `type` strings. Whether a node is
//! statement-class or expression-class is decided here, by discriminant,
//! never by the position the node occupies.

use std::fmt;

use crate::node::Node;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Program,
    ExpressionStatement,
    BlockStatement,
    VariableDeclaration,
    VariableDeclarator,
    ReturnStatement,
    EmptyStatement,
    BinaryExpression,
    LogicalExpression,
    AssignmentExpression,
    ConditionalExpression,
    SequenceExpression,
    UnaryExpression,
    UpdateExpression,
    MemberExpression,
    CallExpression,
    NewExpression,
    FunctionExpression,
    ArrayExpression,
    ThisExpression,
    Identifier,
    Literal,
}

impl NodeKind {
    pub const ALL: [Self; 22] = [
        Self::Program,
        Self::ExpressionStatement,
        Self::BlockStatement,
        Self::VariableDeclaration,
        Self::VariableDeclarator,
        Self::ReturnStatement,
        Self::EmptyStatement,
        Self::BinaryExpression,
        Self::LogicalExpression,
        Self::AssignmentExpression,
        Self::ConditionalExpression,
        Self::SequenceExpression,
        Self::UnaryExpression,
        Self::UpdateExpression,
        Self::MemberExpression,
        Self::CallExpression,
        Self::NewExpression,
        Self::FunctionExpression,
        Self::ArrayExpression,
        Self::ThisExpression,
        Self::Identifier,
        Self::Literal,
    ];

    /// The ESTree `type` string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::ExpressionStatement => "ExpressionStatement",
            Self::BlockStatement => "BlockStatement",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::VariableDeclarator => "VariableDeclarator",
            Self::ReturnStatement => "ReturnStatement",
            Self::EmptyStatement => "EmptyStatement",
            Self::BinaryExpression => "BinaryExpression",
            Self::LogicalExpression => "LogicalExpression",
            Self::AssignmentExpression => "AssignmentExpression",
            Self::ConditionalExpression => "ConditionalExpression",
            Self::SequenceExpression => "SequenceExpression",
            Self::UnaryExpression => "UnaryExpression",
            Self::UpdateExpression => "UpdateExpression",
            Self::MemberExpression => "MemberExpression",
            Self::CallExpression => "CallExpression",
            Self::NewExpression => "NewExpression",
            Self::FunctionExpression => "FunctionExpression",
            Self::ArrayExpression => "ArrayExpression",
            Self::ThisExpression => "ThisExpression",
            Self::Identifier => "Identifier",
            Self::Literal => "Literal",
        }
    }

    /// Look up a kind by its ESTree `type` string.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }

    /// Statement-class kinds; the only kinds accepted as a generation root.
    pub const fn is_statement(self) -> bool {
        matches!(
            self,
            Self::Program
                | Self::ExpressionStatement
                | Self::BlockStatement
                | Self::VariableDeclaration
                | Self::ReturnStatement
                | Self::EmptyStatement
        )
    }

    /// Expression-class kinds. `VariableDeclarator` is neither.
    pub const fn is_expression(self) -> bool {
        !self.is_statement() && !matches!(self, Self::VariableDeclarator)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    /// Discriminant of this node.
    pub const fn kind(&self) -> NodeKind {
        match self {
            Self::Program(_) => NodeKind::Program,
            Self::ExpressionStatement(_) => NodeKind::ExpressionStatement,
            Self::BlockStatement(_) => NodeKind::BlockStatement,
            Self::VariableDeclaration(_) => NodeKind::VariableDeclaration,
            Self::ReturnStatement(_) => NodeKind::ReturnStatement,
            Self::EmptyStatement {} => NodeKind::EmptyStatement,
            Self::BinaryExpression(_) => NodeKind::BinaryExpression,
            Self::LogicalExpression(_) => NodeKind::LogicalExpression,
            Self::AssignmentExpression(_) => NodeKind::AssignmentExpression,
            Self::ConditionalExpression(_) => NodeKind::ConditionalExpression,
            Self::SequenceExpression(_) => NodeKind::SequenceExpression,
            Self::UnaryExpression(_) => NodeKind::UnaryExpression,
            Self::UpdateExpression(_) => NodeKind::UpdateExpression,
            Self::MemberExpression(_) => NodeKind::MemberExpression,
            Self::CallExpression(_) => NodeKind::CallExpression,
            Self::NewExpression(_) => NodeKind::NewExpression,
            Self::FunctionExpression(_) => NodeKind::FunctionExpression,
            Self::ArrayExpression(_) => NodeKind::ArrayExpression,
            Self::ThisExpression {} => NodeKind::ThisExpression,
            Self::Identifier(_) => NodeKind::Identifier,
            Self::Literal(_) => NodeKind::Literal,
        }
    }

    pub const fn is_statement(&self) -> bool {
        self.kind().is_statement()
    }

    pub const fn is_expression(&self) -> bool {
        self.kind().is_expression()
    }
}
