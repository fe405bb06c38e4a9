//! ESTree node definitions.
//!
//! `Node` is internally tagged by the ESTree `type` field, so a JSON object
//! such as `{ "type": "Identifier", "name": "x" }` deserializes straight into
//! `Node::Identifier`. Every record lists its required fields explicitly;
//! positional ESTree fields (`start`, `end`, `loc`, `range`) are ignored.

use std::fmt;

use serde::Deserialize;

/// A node of the syntax tree.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    // =========================================================================
    // Statements
    // =========================================================================
    /// Whole script: `stmt stmt ...`
    Program(Program),

    /// Expression statement: `expr;`
    ExpressionStatement(ExpressionStatement),

    /// Block: `{ stmts }`
    BlockStatement(BlockStatement),

    /// Variable declaration: `let a = 1, b;`
    VariableDeclaration(VariableDeclaration),

    /// Return statement: `return expr;`
    ReturnStatement(ReturnStatement),

    /// Empty statement: `;`
    EmptyStatement {},

    // =========================================================================
    // Expressions
    // =========================================================================
    /// Binary expression: `left op right`
    BinaryExpression(BinaryExpression),

    /// Logical expression: `left || right`, `left && right`
    LogicalExpression(LogicalExpression),

    /// Assignment: `left = right`, `left += right`
    AssignmentExpression(AssignmentExpression),

    /// Conditional: `test ? consequent : alternate`
    ConditionalExpression(ConditionalExpression),

    /// Comma expression: `a, b, c`
    SequenceExpression(SequenceExpression),

    /// Prefix unary: `!x`, `-x`, `typeof x`
    UnaryExpression(UnaryExpression),

    /// Increment/decrement: `++x`, `x--`
    UpdateExpression(UpdateExpression),

    /// Member access: `object.property`, `object[property]`
    MemberExpression(MemberExpression),

    /// Call: `callee(args)`
    CallExpression(CallExpression),

    /// Constructor call: `new Callee(args)`
    NewExpression(NewExpression),

    /// Function expression: `function name(params) { body }`
    FunctionExpression(FunctionExpression),

    /// Array literal: `[a, , b]`
    ArrayExpression(ArrayExpression),

    /// `this`
    ThisExpression {},

    /// Identifier: `foo`
    Identifier(Identifier),

    /// Primitive literal: `42`, `"s"`, `true`, `null`
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Program {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExpressionStatement {
    pub expression: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BlockStatement {
    pub body: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclaration {
    pub kind: VariableKind,
    pub declarations: Vec<VariableDeclarator>,
}

/// Declaration keyword of a `VariableDeclaration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Var => "var",
            Self::Let => "let",
            Self::Const => "const",
        }
    }
}

impl fmt::Display for VariableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `id = init` entry of a declaration.
///
/// Declarators only occur inside `VariableDeclaration::declarations`, so they
/// are a plain record rather than a `Node` variant. The ESTree `type` field of
/// a declarator object is accepted and ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VariableDeclarator {
    pub id: Box<Node>,
    #[serde(default)]
    pub init: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ReturnStatement {
    #[serde(default)]
    pub argument: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct BinaryExpression {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogicalExpression {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AssignmentExpression {
    pub operator: String,
    pub left: Box<Node>,
    pub right: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConditionalExpression {
    pub test: Box<Node>,
    pub consequent: Box<Node>,
    pub alternate: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SequenceExpression {
    pub expressions: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UnaryExpression {
    pub operator: String,
    pub argument: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UpdateExpression {
    pub operator: String,
    pub argument: Box<Node>,
    pub prefix: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MemberExpression {
    pub object: Box<Node>,
    pub property: Box<Node>,
    #[serde(default)]
    pub computed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallExpression {
    pub callee: Box<Node>,
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewExpression {
    pub callee: Box<Node>,
    #[serde(default)]
    pub arguments: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FunctionExpression {
    #[serde(default)]
    pub id: Option<Box<Node>>,
    pub params: Vec<Node>,
    /// Always a `BlockStatement` in well-formed input.
    pub body: Box<Node>,
    #[serde(default, rename = "async")]
    pub is_async: bool,
    #[serde(default)]
    pub generator: bool,
}

/// Array literal; `None` entries are holes (`[a, , b]`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ArrayExpression {
    pub elements: Vec<Option<Node>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Literal {
    #[serde(default)]
    pub value: LiteralValue,
    /// Source text of the literal as written, when the parser kept it.
    #[serde(default)]
    pub raw: Option<String>,
}

/// Primitive value carried by a `Literal`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    Boolean(bool),
    Number(f64),
    String(String),
    #[default]
    Null,
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
