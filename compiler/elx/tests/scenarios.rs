//! End-to-end behavior through the public facade.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use pretty_assertions::assert_eq;

use el_ir::{BinaryOp, ExprKind, Literal, TokenKind};
use el_lexer::Lexer;
use elx::{DefaultEvalContext, EmptyContext, Error, EvalErrorKind, Value};

fn eval(text: &str) -> Value {
    elx::evaluate(&elx::parse(text).unwrap(), &EmptyContext).unwrap()
}

fn first_literal(text: &str) -> (TokenKind, Literal) {
    let mut lexer = Lexer::new(text);
    let token = lexer.next_token().unwrap();
    (token.kind, lexer.literal_value().unwrap().unwrap())
}

#[test]
fn precedence_builds_nested_binary() {
    let parsed = el_parse::parse("1+2*3").unwrap();
    let root = parsed.arena.get_expr(parsed.root);
    let ExprKind::Binary { op: BinaryOp::Add, left, right } = &root.kind else {
        panic!("expected addition, got {:?}", root.kind);
    };
    assert_eq!(
        parsed.arena.get_expr(*left).kind,
        ExprKind::Literal(Literal::Int(1))
    );
    assert!(matches!(
        parsed.arena.get_expr(*right).kind,
        ExprKind::Binary { op: BinaryOp::Mul, .. }
    ));
    assert_eq!(eval("1+2*3"), Value::Long(7));
}

#[test]
fn escaped_quote() {
    assert_eq!(eval(r"'it\'s'"), Value::string("it's"));
}

#[test]
fn hex_escapes_in_alias_strings() {
    assert_eq!(eval(r#""\x41\x42""#), Value::string("AB"));
}

#[test]
fn hex_literals() {
    assert_eq!(first_literal("0x1F"), (TokenKind::Hex, Literal::Int(31)));
    assert_eq!(first_literal("0x1FL"), (TokenKind::HexLong, Literal::Long(31)));
    assert_eq!(eval("0x1FL"), Value::Long(31));
}

#[test]
fn property_of_map_variable() {
    let expr = elx::parse("a.b").unwrap();
    let ctx = DefaultEvalContext::new().with_variable("a", Value::map([("b", Value::Int(5))]));
    assert_eq!(expr.evaluate(&ctx).unwrap(), Value::Int(5));
}

#[test]
fn unknown_function() {
    let err = elx::evaluate(&elx::parse("foo()").unwrap(), &EmptyContext).unwrap_err();
    let Error::Eval(eval_err) = &err else {
        panic!("expected an evaluation error, got {err:?}");
    };
    assert_eq!(
        eval_err.kind,
        EvalErrorKind::NoSuchFunction { name: "foo".into() }
    );
    assert_eq!(err.message_key(), "el.eval.noSuchFunction");
    assert_eq!(err.message_args()[0], "foo");
}

#[test]
fn integer_widening() {
    assert_eq!(eval("2147483647"), Value::Int(i32::MAX));
    assert_eq!(eval("2147483648"), Value::Long(2_147_483_648));
    assert_eq!(
        eval("9223372036854775808"),
        Value::big_int("9223372036854775808".parse().unwrap())
    );
    assert_eq!(eval("2147483647 + 1"), Value::Long(2_147_483_648));
}

#[test]
fn errors_carry_message_keys() {
    let lex = elx::parse("'open").unwrap_err();
    assert!(matches!(lex, Error::Parse(_)), "{lex:?}");
    assert!(lex.message_key().starts_with("el.lex."), "{}", lex.message_key());

    let parse = elx::parse("1 +").unwrap_err();
    assert!(parse.message_key().starts_with("el.parse."), "{}", parse.message_key());

    let eval = elx::evaluate(&elx::parse("null[0]").unwrap(), &EmptyContext).unwrap_err();
    assert_eq!(eval.message_key(), "el.eval.nullArrayTarget");
}

#[test]
fn print_is_canonical() {
    let expr = elx::parse("a ?b:c.d( 1,'x' )[ 2 ]").unwrap();
    assert_eq!(elx::print(&expr), "a ? b : c.d(1, 'x')[2]");
}
