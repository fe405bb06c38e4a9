//! Fail-fast generation errors.

use jsgen_ast::{Node, NodeKind};
use jsgen_emitter::limits::MAX_EMIT_DEPTH;
use jsgen_emitter::{GenerateError, NodePosition, Printer, generate};

fn id(name: &str) -> Node {
    Node::ident(name)
}

fn expect_err(root: &Node) -> GenerateError {
    generate(root).expect_err("generation should fail")
}

#[test]
fn test_expression_root_is_rejected() {
    let err = expect_err(&id("x"));
    assert_eq!(
        err,
        GenerateError::UnsupportedRoot {
            kind: NodeKind::Identifier
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported root node kind `Identifier`: expected a statement"
    );

    let err = expect_err(&Node::binary(id("a"), "+", id("b")));
    assert!(matches!(
        err,
        GenerateError::UnsupportedRoot {
            kind: NodeKind::BinaryExpression
        }
    ));
}

#[test]
fn test_operator_outside_table() {
    let err = expect_err(&Node::expr_stmt(Node::binary(id("a"), "**", id("b"))));
    assert_eq!(
        err,
        GenerateError::UnknownOperator {
            operator: "**".to_string()
        }
    );
    assert_eq!(err.to_string(), "unknown binary operator `**`");

    let err = expect_err(&Node::expr_stmt(Node::logical(id("a"), "??", id("b"))));
    assert!(matches!(err, GenerateError::UnknownOperator { ref operator } if operator == "??"));

    let err = expect_err(&Node::expr_stmt(Node::assign_op(id("a"), "+", id("b"))));
    assert!(matches!(err, GenerateError::UnknownOperator { ref operator } if operator == "+"));
}

#[test]
fn test_unknown_operator_deep_in_tree() {
    let inner = Node::binary(id("x"), "<=>", id("y"));
    let root = Node::program(vec![
        Node::expr_stmt(id("ok")),
        Node::expr_stmt(Node::call(id("f"), vec![Node::number(1.0), inner])),
    ]);
    assert!(matches!(
        expect_err(&root),
        GenerateError::UnknownOperator { .. }
    ));
}

#[test]
fn test_statement_in_expression_position() {
    let root = Node::expr_stmt(Node::binary(id("a"), "+", Node::block(vec![])));
    let err = expect_err(&root);
    assert_eq!(
        err,
        GenerateError::UnsupportedNodeKind {
            kind: NodeKind::BlockStatement,
            position: NodePosition::Expression,
        }
    );
    assert_eq!(
        err.to_string(),
        "unsupported node kind `BlockStatement` in expression position"
    );
}

#[test]
fn test_expression_in_statement_position() {
    let root = Node::program(vec![id("x")]);
    assert_eq!(
        expect_err(&root),
        GenerateError::unsupported(NodeKind::Identifier, NodePosition::Statement)
    );

    let root = Node::block(vec![Node::expr_stmt(id("a")), Node::number(1.0)]);
    assert_eq!(
        expect_err(&root),
        GenerateError::unsupported(NodeKind::Literal, NodePosition::Statement)
    );
}

#[test]
fn test_function_parts_are_checked() {
    let bad_param = Node::func_expr(None, vec![Node::number(1.0)], vec![]);
    assert_eq!(
        expect_err(&Node::expr_stmt(bad_param)),
        GenerateError::unsupported(NodeKind::Literal, NodePosition::Parameter)
    );

    let Node::FunctionExpression(mut func) = Node::func_expr(None, vec![], vec![]) else {
        unreachable!();
    };
    func.body = Box::new(Node::ret(None));
    assert_eq!(
        expect_err(&Node::expr_stmt(Node::FunctionExpression(func))),
        GenerateError::unsupported(NodeKind::ReturnStatement, NodePosition::FunctionBody)
    );

    let Node::FunctionExpression(mut func) = Node::func_expr(None, vec![], vec![]) else {
        unreachable!();
    };
    func.id = Some(Box::new(Node::string("name")));
    let err = expect_err(&Node::expr_stmt(Node::FunctionExpression(func)));
    assert_eq!(
        err.to_string(),
        "unsupported node kind `Literal` in function name position"
    );
}

#[test]
fn test_dotted_property_must_be_identifier() {
    let root = Node::expr_stmt(Node::member(id("a"), Node::number(0.0)));
    let err = expect_err(&root);
    assert_eq!(
        err,
        GenerateError::unsupported(NodeKind::Literal, NodePosition::PropertyName)
    );
    assert_eq!(
        err.to_string(),
        "unsupported node kind `Literal` in property name position"
    );

    let computed = Node::expr_stmt(Node::computed_member(id("a"), Node::number(0.0)));
    assert_eq!(generate(&computed).unwrap(), "a[0];");
}

#[test]
fn test_printer_recovers_after_error() {
    let mut printer = Printer::new();
    let bad = Node::program(vec![
        Node::expr_stmt(id("partial")),
        Node::expr_stmt(Node::binary(id("a"), "**", id("b"))),
    ]);
    assert!(printer.print(&bad).is_err());
    assert_eq!(printer.print(&Node::expr_stmt(id("b"))).unwrap(), "b;");
}

fn nested_negation(depth: usize) -> Node {
    let mut expr = id("x");
    for _ in 0..depth {
        expr = Node::unary("!", expr);
    }
    Node::expr_stmt(expr)
}

#[test]
fn test_nesting_limit() {
    let shallow = generate(&nested_negation(100)).unwrap();
    assert_eq!(shallow.len(), "x;".len() + 100);

    let deep = MAX_EMIT_DEPTH as usize + 100;
    assert_eq!(
        generate(&nested_negation(deep)),
        Err(GenerateError::NestingTooDeep {
            limit: MAX_EMIT_DEPTH
        })
    );
}

#[test]
fn test_nesting_just_under_limit_renders() {
    let depth = MAX_EMIT_DEPTH as usize - 2;
    let text = generate(&nested_negation(depth)).unwrap();
    assert_eq!(text.len(), "x;".len() + depth);
}
