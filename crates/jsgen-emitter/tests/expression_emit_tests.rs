//! Rendering of individual expression kinds.

use jsgen_ast::{Literal, LiteralValue, Node};
use jsgen_emitter::generate;

/// Render `expr` as an expression statement and drop the trailing `;`.
fn emit(expr: Node) -> String {
    let text = generate(&Node::expr_stmt(expr)).expect("expression should render");
    text.strip_suffix(';').unwrap_or(&text).to_string()
}

fn id(name: &str) -> Node {
    Node::ident(name)
}

#[test]
fn test_binary_respects_precedence() {
    let expr = Node::binary(
        Node::number(1.0),
        "+",
        Node::binary(Node::number(2.0), "*", Node::number(3.0)),
    );
    assert_eq!(emit(expr), "1 + 2 * 3");

    let expr = Node::binary(
        Node::binary(Node::number(1.0), "+", Node::number(2.0)),
        "*",
        Node::number(3.0),
    );
    assert_eq!(emit(expr), "(1 + 2) * 3");
}

#[test]
fn test_word_relational_operators() {
    assert_eq!(emit(Node::binary(id("k"), "in", id("obj"))), "k in obj");
    assert_eq!(
        emit(Node::binary(id("a"), "instanceof", id("Array"))),
        "a instanceof Array"
    );
}

#[test]
fn test_unary_spacing() {
    assert_eq!(emit(Node::unary("typeof", id("x"))), "typeof x");
    assert_eq!(emit(Node::unary("void", Node::number(0.0))), "void 0");
    assert_eq!(
        emit(Node::unary("delete", Node::member(id("a"), id("b")))),
        "delete a.b"
    );
    assert_eq!(emit(Node::unary("-", id("x"))), "-x");
    assert_eq!(emit(Node::unary("!", id("x"))), "!x");
    assert_eq!(emit(Node::unary("~", id("x"))), "~x");
}

#[test]
fn test_unary_before_additive() {
    let expr = Node::binary(Node::unary("-", id("x")), "+", id("y"));
    assert_eq!(emit(expr), "-x + y");
}

#[test]
fn test_unary_sign_never_fuses() {
    assert_eq!(emit(Node::unary("-", Node::unary("-", id("x")))), "- -x");
    assert_eq!(emit(Node::unary("-", Node::number(-1.0))), "- -1");
    assert_eq!(
        emit(Node::unary("+", Node::update("++", id("x"), true))),
        "+ ++x"
    );
    assert_eq!(
        emit(Node::unary("-", Node::update("++", id("x"), true))),
        "-++x"
    );
    assert_eq!(emit(Node::unary("!", Node::unary("!", id("x")))), "!!x");
}

#[test]
fn test_update_prefix_and_postfix() {
    assert_eq!(emit(Node::update("++", id("i"), true)), "++i");
    assert_eq!(emit(Node::update("--", id("i"), false)), "i--");
    assert_eq!(
        emit(Node::update("++", Node::member(id("a"), id("b")), false)),
        "a.b++"
    );
    assert_eq!(
        emit(Node::unary("!", Node::update("++", id("x"), false))),
        "!x++"
    );
}

#[test]
fn test_member_access() {
    assert_eq!(emit(Node::member(id("a"), id("b"))), "a.b");
    assert_eq!(
        emit(Node::computed_member(id("a"), Node::number(0.0))),
        "a[0]"
    );
    assert_eq!(
        emit(Node::member(Node::member(id("a"), id("b")), id("c"))),
        "a.b.c"
    );
    assert_eq!(
        emit(Node::computed_member(
            id("a"),
            Node::binary(id("i"), "+", Node::number(1.0))
        )),
        "a[i + 1]"
    );
    assert_eq!(emit(Node::member(Node::this(), id("x"))), "this.x");
}

#[test]
fn test_member_object_parenthesization() {
    assert_eq!(
        emit(Node::member(Node::binary(id("a"), "+", id("b")), id("c"))),
        "(a + b).c"
    );
    assert_eq!(
        emit(Node::member(Node::unary("!", id("a")), id("b"))),
        "(!a).b"
    );
    assert_eq!(
        emit(Node::member(Node::number(5.0), id("toString"))),
        "(5).toString"
    );
    assert_eq!(
        emit(Node::computed_member(Node::number(5.0), Node::number(0.0))),
        "5[0]"
    );
    assert_eq!(emit(Node::member(Node::number(1.5), id("x"))), "1.5.x");
    assert_eq!(emit(Node::member(Node::number(-1.0), id("x"))), "(-1).x");
}

#[test]
fn test_call_arguments() {
    let call = Node::call(id("f"), vec![Node::number(1.0), Node::number(2.0)]);
    assert_eq!(emit(call), "f(1, 2)");
    assert_eq!(emit(Node::call(id("f"), vec![])), "f()");
    assert_eq!(
        emit(Node::call(id("f"), vec![Node::binary(id("a"), "+", id("b"))])),
        "f(a + b)"
    );
    assert_eq!(
        emit(Node::call(
            id("f"),
            vec![Node::sequence(vec![id("a"), id("b")])]
        )),
        "f((a, b))"
    );
}

#[test]
fn test_call_chains() {
    let method = Node::call(Node::member(id("a"), id("b")), vec![]);
    assert_eq!(emit(Node::member(method, id("c"))), "a.b().c");
    assert_eq!(
        emit(Node::call(Node::call(id("f"), vec![]), vec![])),
        "f()()"
    );
    assert_eq!(
        emit(Node::call(
            Node::member(Node::logical(id("a"), "||", id("b")), id("c")),
            vec![]
        )),
        "(a || b).c()"
    );
}

#[test]
fn test_new_expression() {
    assert_eq!(emit(Node::new_expr(id("Foo"), vec![])), "new Foo()");
    assert_eq!(
        emit(Node::new_expr(
            Node::member(id("a"), id("B")),
            vec![Node::number(1.0)]
        )),
        "new a.B(1)"
    );
    assert_eq!(
        emit(Node::new_expr(Node::call(id("f"), vec![]), vec![])),
        "new (f())()"
    );
    assert_eq!(
        emit(Node::new_expr(
            Node::member(Node::call(id("a"), vec![]), id("B")),
            vec![]
        )),
        "new (a().B)()"
    );
    assert_eq!(
        emit(Node::member(Node::new_expr(id("Foo"), vec![]), id("bar"))),
        "new Foo().bar"
    );
}

#[test]
fn test_function_expression() {
    let func = Node::func_expr(
        Some("add"),
        vec![id("a"), id("b")],
        vec![Node::ret(Some(Node::binary(id("a"), "+", id("b"))))],
    );
    let call = Node::call(id("use"), vec![func]);
    assert_eq!(emit(call), "use(function add(a, b) {\nreturn a + b;\n})");

    let anonymous = Node::call(id("use"), vec![Node::func_expr(None, vec![], vec![])]);
    assert_eq!(emit(anonymous), "use(function () {\n})");
}

#[test]
fn test_async_generator_function() {
    let Node::FunctionExpression(mut func) = Node::func_expr(Some("g"), vec![], vec![]) else {
        unreachable!();
    };
    func.is_async = true;
    func.generator = true;
    let expr = Node::assign(id("x"), Node::FunctionExpression(func));
    assert_eq!(emit(expr), "x = async function* g() {\n}");
}

#[test]
fn test_array_expression() {
    assert_eq!(emit(Node::array(vec![])), "[]");
    assert_eq!(
        emit(Node::array(vec![
            Some(Node::number(1.0)),
            None,
            Some(Node::number(2.0))
        ])),
        "[1,, 2]"
    );
    assert_eq!(emit(Node::array(vec![Some(id("a")), None])), "[a,,]");
    assert_eq!(
        emit(Node::array(vec![Some(Node::sequence(vec![id("a"), id("b")]))])),
        "[(a, b)]"
    );
}

#[test]
fn test_literals() {
    assert_eq!(emit(Node::number(5.0)), "5");
    assert_eq!(emit(Node::number(0.25)), "0.25");
    assert_eq!(emit(Node::boolean(true)), "true");
    assert_eq!(emit(Node::boolean(false)), "false");
    assert_eq!(emit(Node::null()), "null");
    assert_eq!(emit(Node::string("hello")), "\"hello\"");
}

#[test]
fn test_string_escaping() {
    assert_eq!(
        emit(Node::string("say \"hi\"\n")),
        r#""say \"hi\"\n""#
    );
    assert_eq!(emit(Node::string("a\\b\tc")), r#""a\\b\tc""#);
    assert_eq!(emit(Node::string("nul\0")), r#""nul\u0000""#);
    assert_eq!(emit(Node::string("line\u{2028}sep")), r#""line\u2028sep""#);
    assert_eq!(emit(Node::string("it's")), "\"it's\"");
}

#[test]
fn test_numeric_raw_text_is_preserved() {
    let hex = Node::Literal(Literal {
        value: LiteralValue::Number(255.0),
        raw: Some("0xff".to_string()),
    });
    assert_eq!(emit(Node::binary(hex, "&", id("mask"))), "0xff & mask");
}
