//! Builder helpers for constructing trees in code.

use crate::node::*;

impl Node {
    // =========================================================================
    // Statements
    // =========================================================================

    /// Create a program
    pub const fn program(body: Vec<Self>) -> Self {
        Self::Program(Program { body })
    }

    /// Create an expression statement
    pub fn expr_stmt(expression: Self) -> Self {
        Self::ExpressionStatement(ExpressionStatement {
            expression: Box::new(expression),
        })
    }

    /// Create a block
    pub const fn block(body: Vec<Self>) -> Self {
        Self::BlockStatement(BlockStatement { body })
    }

    /// Create a variable declaration
    pub const fn var_decl(kind: VariableKind, declarations: Vec<VariableDeclarator>) -> Self {
        Self::VariableDeclaration(VariableDeclaration { kind, declarations })
    }

    /// Create a return statement
    pub fn ret(argument: Option<Self>) -> Self {
        Self::ReturnStatement(ReturnStatement {
            argument: argument.map(Box::new),
        })
    }

    /// Create an empty statement `;`
    pub const fn empty() -> Self {
        Self::EmptyStatement {}
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Create a binary expression
    pub fn binary(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::BinaryExpression(BinaryExpression {
            operator: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create a logical expression (`||` / `&&`)
    pub fn logical(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::LogicalExpression(LogicalExpression {
            operator: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create an assignment with an explicit operator (`=`, `+=`, ...)
    pub fn assign_op(left: Self, op: impl Into<String>, right: Self) -> Self {
        Self::AssignmentExpression(AssignmentExpression {
            operator: op.into(),
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// Create a plain assignment `left = right`
    pub fn assign(left: Self, right: Self) -> Self {
        Self::assign_op(left, "=", right)
    }

    /// Create a conditional expression
    pub fn conditional(test: Self, consequent: Self, alternate: Self) -> Self {
        Self::ConditionalExpression(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }

    /// Create a comma expression
    pub const fn sequence(expressions: Vec<Self>) -> Self {
        Self::SequenceExpression(SequenceExpression { expressions })
    }

    /// Create a prefix unary expression
    pub fn unary(op: impl Into<String>, argument: Self) -> Self {
        Self::UnaryExpression(UnaryExpression {
            operator: op.into(),
            argument: Box::new(argument),
        })
    }

    /// Create an update expression (`++x` when `prefix`, else `x++`)
    pub fn update(op: impl Into<String>, argument: Self, prefix: bool) -> Self {
        Self::UpdateExpression(UpdateExpression {
            operator: op.into(),
            argument: Box::new(argument),
            prefix,
        })
    }

    /// Create a property access `object.property`
    pub fn member(object: Self, property: Self) -> Self {
        Self::MemberExpression(MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed: false,
        })
    }

    /// Create an element access `object[property]`
    pub fn computed_member(object: Self, property: Self) -> Self {
        Self::MemberExpression(MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed: true,
        })
    }

    /// Create a call expression
    pub fn call(callee: Self, args: Vec<Self>) -> Self {
        Self::CallExpression(CallExpression {
            callee: Box::new(callee),
            arguments: args,
        })
    }

    /// Create a new expression
    pub fn new_expr(callee: Self, args: Vec<Self>) -> Self {
        Self::NewExpression(NewExpression {
            callee: Box::new(callee),
            arguments: args,
        })
    }

    /// Create a function expression with a block body
    pub fn func_expr(name: Option<&str>, params: Vec<Self>, body: Vec<Self>) -> Self {
        Self::FunctionExpression(FunctionExpression {
            id: name.map(|name| Box::new(Self::ident(name))),
            params,
            body: Box::new(Self::block(body)),
            is_async: false,
            generator: false,
        })
    }

    /// Create an array literal; `None` entries are holes
    pub const fn array(elements: Vec<Option<Self>>) -> Self {
        Self::ArrayExpression(ArrayExpression { elements })
    }

    /// Create `this`
    pub const fn this() -> Self {
        Self::ThisExpression {}
    }

    // =========================================================================
    // Leaves
    // =========================================================================

    /// Create an identifier
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier { name: name.into() })
    }

    /// Create a literal from any primitive
    pub fn literal(value: impl Into<LiteralValue>) -> Self {
        Self::Literal(Literal {
            value: value.into(),
            raw: None,
        })
    }

    /// Create a numeric literal
    pub fn number(value: f64) -> Self {
        Self::literal(value)
    }

    /// Create a string literal
    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(value.into())
    }

    /// Create a boolean literal
    pub fn boolean(value: bool) -> Self {
        Self::literal(value)
    }

    /// Create `null`
    pub const fn null() -> Self {
        Self::Literal(Literal {
            value: LiteralValue::Null,
            raw: None,
        })
    }
}

impl VariableDeclarator {
    pub fn new(id: Node, init: Option<Node>) -> Self {
        Self {
            id: Box::new(id),
            init: init.map(Box::new),
        }
    }

    /// Declarator binding `name`, optionally initialized
    pub fn named(name: impl Into<String>, init: Option<Node>) -> Self {
        Self::new(Node::ident(name), init)
    }
}
