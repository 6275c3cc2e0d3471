use super::*;
use pretty_assertions::assert_eq;

#[test]
fn display_without_context() {
    let err = ParseError::unexpected("`)`", TokenKind::Comma, Span::new(4, 5));
    assert_eq!(err.to_string(), "expected `)`, found `,` (at 4..5)");
}

#[test]
fn display_with_context() {
    let err = ParseError::unexpected("`]`", TokenKind::Eof, Span::new(3, 3))
        .or_context(ErrorContext::IndexExpression);
    assert_eq!(
        err.to_string(),
        "expected `]`, found end of expression (at 3..3) while parsing an index expression"
    );
}

#[test]
fn innermost_context_wins() {
    let err = ParseError::invalid_call_target(Span::new(0, 3))
        .or_context(ErrorContext::MethodCall)
        .or_context(ErrorContext::Expression);
    assert_eq!(err.context, Some(ErrorContext::MethodCall));
}

#[test]
fn lex_errors_keep_their_key_and_span() {
    let lex = LexError::unterminated_string(Span::new(2, 6), '\'');
    let err = ParseError::from(lex.clone());
    assert_eq!(err.span, Span::new(2, 6));
    assert_eq!(err.message_key(), "el.lex.unterminatedString");
    assert_eq!(err.message_args(), lex.message_args());
    assert_eq!(
        err.to_string(),
        "unclosed string literal, expected closing ' (at 2..6)"
    );
}

#[test]
fn message_args_end_with_offset() {
    let err = ParseError::unresolved_type("Missing", Span::new(2, 9));
    assert_eq!(err.message_key(), "el.parse.unresolvedType");
    assert_eq!(err.message_args(), vec!["Missing".to_string(), "2".to_string()]);

    let err = ParseError::trailing(TokenKind::Int, Span::new(2, 3));
    assert_eq!(err.message_key(), "el.parse.multiExpressions");
}
