use super::*;
use pretty_assertions::assert_eq;

#[test]
fn builtins_resolve_by_simple_name() {
    let ctx = DefaultParseContext::new();
    assert_eq!(ctx.resolve_type("String"), Some("el.lang.String".into()));
    assert_eq!(ctx.resolve_type("Number"), Some("el.lang.Number".into()));
    assert_eq!(ctx.resolve_type("Nope"), None);
}

#[test]
fn qualified_names_resolve_as_written() {
    let ctx = DefaultParseContext::new();
    assert_eq!(
        ctx.resolve_type("el.lang.Integer"),
        Some("el.lang.Integer".into())
    );
}

#[test]
fn latest_import_wins() {
    let mut ctx = DefaultParseContext::new();
    ctx.register_type("com.first.User");
    ctx.register_type("com.second.User");
    ctx.import("com.first");
    ctx.import("com.second");
    assert_eq!(ctx.resolve_type("User"), Some("com.second.User".into()));
}

#[test]
fn imports_shadow_default_packages() {
    let mut ctx = DefaultParseContext::new();
    ctx.register_type("com.acme.String");
    ctx.import("com.acme");
    assert_eq!(ctx.resolve_type("String"), Some("com.acme.String".into()));
}

#[test]
fn single_type_import() {
    let mut ctx = DefaultParseContext::new();
    ctx.register_type("com.acme.model.Order");
    ctx.import("com.acme.model.Order");
    assert_eq!(
        ctx.resolve_type("Order"),
        Some("com.acme.model.Order".into())
    );
}

#[test]
fn empty_context_resolves_nothing() {
    let ctx = DefaultParseContext::empty();
    assert_eq!(ctx.resolve_type("String"), None);
    assert_eq!(ctx.constant("x"), None);
}

#[test]
fn constants_are_returned_by_name() {
    let mut ctx = DefaultParseContext::new();
    ctx.set_constant("MAX", Literal::Int(10));
    assert_eq!(ctx.constant("MAX"), Some(Literal::Int(10)));
    assert_eq!(ctx.constant("MIN"), None);
}
