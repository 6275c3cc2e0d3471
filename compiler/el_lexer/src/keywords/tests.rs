use super::*;

// === Reserved keyword tests ===

#[test]
fn statement_keywords_are_reserved() {
    assert_eq!(lookup("if"), Some(TokenKind::If));
    assert_eq!(lookup("else"), Some(TokenKind::Else));
    assert_eq!(lookup("return"), Some(TokenKind::Return));
    assert_eq!(lookup("for"), Some(TokenKind::For));
    assert_eq!(lookup("while"), Some(TokenKind::While));
    assert_eq!(lookup("do"), Some(TokenKind::Do));
    assert_eq!(lookup("new"), Some(TokenKind::New));
}

#[test]
fn operator_words() {
    assert_eq!(lookup("instanceof"), Some(TokenKind::InstanceOf));
    assert_eq!(lookup("contains"), Some(TokenKind::Contains));
    assert_eq!(lookup("startsWith"), Some(TokenKind::StartsWith));
    assert_eq!(lookup("endsWith"), Some(TokenKind::EndsWith));
}

#[test]
fn primitive_type_names() {
    assert_eq!(lookup("byte"), Some(TokenKind::ByteType));
    assert_eq!(lookup("short"), Some(TokenKind::ShortType));
    assert_eq!(lookup("int"), Some(TokenKind::IntType));
    assert_eq!(lookup("long"), Some(TokenKind::LongType));
    assert_eq!(lookup("float"), Some(TokenKind::FloatType));
    assert_eq!(lookup("double"), Some(TokenKind::DoubleType));
}

#[test]
fn literal_keywords() {
    assert_eq!(lookup("null"), Some(TokenKind::Null));
    assert_eq!(lookup("true"), Some(TokenKind::True));
    assert_eq!(lookup("false"), Some(TokenKind::False));
}

// === Non-keyword tests ===

#[test]
fn keywords_are_case_sensitive() {
    assert_eq!(lookup("If"), None);
    assert_eq!(lookup("NULL"), None);
    assert_eq!(lookup("startswith"), None);
    assert_eq!(lookup("InstanceOf"), None);
}

#[test]
fn identifiers_are_not_keywords() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("user"), None);
    assert_eq!(lookup("$root"), None);
    assert_eq!(lookup("_if"), None);
    assert_eq!(lookup("containsKey"), None);
    assert_eq!(lookup(""), None);
}

#[test]
fn every_keyword_round_trips_through_token_kind() {
    for word in [
        "if", "else", "return", "for", "while", "do", "new", "instanceof", "contains",
        "startsWith", "endsWith", "byte", "short", "int", "long", "float", "double", "null",
        "true", "false",
    ] {
        let kind = lookup(word);
        assert!(kind.is_some(), "{word} should be reserved");
        assert_eq!(kind.and_then(TokenKind::keyword_str), Some(word));
    }
}
