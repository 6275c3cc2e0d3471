use pretty_assertions::assert_eq;

use super::*;
use crate::host::method;
use crate::test_helpers::{Computed, Row, Settings};
use crate::EvalErrorKind;

#[test]
fn default_context_variables() {
    let mut ctx = DefaultEvalContext::new()
        .with_variable("a", 1)
        .with_variable("n", Value::Null);
    assert_eq!(ctx.resolve_variable("a"), Resolved::Value(Value::Int(1)));
    assert_eq!(ctx.resolve_variable("n"), Resolved::Null);
    assert_eq!(ctx.resolve_variable("zz"), Resolved::Absent);

    assert_eq!(ctx.remove_variable("a"), Some(Value::Int(1)));
    assert_eq!(ctx.resolve_variable("a"), Resolved::Absent);
}

#[test]
fn functions_are_shared_with_the_registry() {
    let registry = Arc::new(FunctionRegistry::new());
    let ctx = DefaultEvalContext::new().with_functions(Arc::clone(&registry));
    assert!(ctx.resolve_function("late").is_none());
    registry.register_fn("late", |_| Ok(Value::Bool(true)));
    assert!(ctx.resolve_function("late").is_some());
}

#[test]
fn map_properties_default_to_null() {
    let map = Value::map([("a", Value::Int(1))]);
    assert_eq!(lookup_property(&EmptyContext, &map, "a").unwrap(), Some(Value::Int(1)));
    assert_eq!(lookup_property(&EmptyContext, &map, "b").unwrap(), Some(Value::Null));

    let settings = Value::object(Settings::default().with("x", "y"));
    assert_eq!(
        lookup_property(&EmptyContext, &settings, "x").unwrap(),
        Some(Value::string("y"))
    );
    assert_eq!(lookup_property(&EmptyContext, &settings, "q").unwrap(), Some(Value::Null));
}

#[test]
fn resolver_then_dyna_bean_then_binder() {
    let computed = Value::object(Computed);
    assert_eq!(
        lookup_property(&EmptyContext, &computed, "answer").unwrap(),
        Some(Value::Int(42))
    );
    assert_eq!(
        lookup_property(&EmptyContext, &computed, "kind").unwrap(),
        Some(Value::string("computed"))
    );
    assert_eq!(lookup_property(&EmptyContext, &computed, "other").unwrap(), None);
}

#[test]
fn binder_properties_and_failures() {
    assert_eq!(
        lookup_property(&EmptyContext, &Value::string(""), "empty").unwrap(),
        Some(Value::Bool(true))
    );

    let mut binder = TypeBinder::new();
    binder.add_getter("el.lang.Integer", "broken", |_| Err("bad getter".into()));
    let ctx = DefaultEvalContext::new().with_binder(Arc::new(binder));
    let err = ctx.property(&Value::Int(1), "broken").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::InvocationFailed {
            name: "broken".to_owned(),
            message: "bad getter".to_owned(),
        }
    );
}

#[test]
fn custom_binder_replaces_builtins() {
    let mut binder = TypeBinder::new();
    binder.add_method(
        "el.lang.String",
        "shout",
        method(|receiver, _| Ok(Value::string(format!("{receiver}!")))),
    );
    let ctx = DefaultEvalContext::new().with_binder(Arc::new(binder));
    let owner = Value::string("hi");
    assert!(ctx.resolve_method(&owner, "length", &[]).is_none());
    let shout = ctx.resolve_method(&owner, "shout", &[]).unwrap();
    assert_eq!(shout.invoke(Some(&owner), &[]).unwrap(), Value::string("hi!"));
}

#[test]
fn array_items() {
    let list = Value::list(vec![Value::Int(10), Value::Int(20)]);
    assert_eq!(array_item(&list, 1).unwrap(), Value::Int(20));
    assert_eq!(
        array_item(&list, 2).unwrap_err().kind,
        EvalErrorKind::IndexOutOfBounds { index: 2, len: 2 }
    );
    assert!(array_item(&list, -1).is_err());

    let map = Value::map([("0", Value::string("zero"))]);
    assert_eq!(array_item(&map, 0).unwrap(), Value::string("zero"));
    assert_eq!(array_item(&map, 1).unwrap(), Value::Null);

    let row = Value::object(Row(vec![Value::Bool(true)]));
    assert_eq!(array_item(&row, 0).unwrap(), Value::Bool(true));
    assert!(array_item(&row, 1).is_err());

    let settings = Value::object(Settings::default().with("3", 3));
    assert_eq!(array_item(&settings, 3).unwrap(), Value::Int(3));

    assert_eq!(
        array_item(&Value::object(Computed), 0).unwrap_err().kind,
        EvalErrorKind::NotIndexable { type_name: "test.Computed".to_owned() }
    );
    assert_eq!(
        array_item(&Value::Int(1), 0).unwrap_err().kind,
        EvalErrorKind::NotIndexable { type_name: "el.lang.Integer".to_owned() }
    );
}

#[test]
fn builtin_instanceof() {
    assert!(is_builtin_instance(&Value::Int(1), "el.lang.Integer"));
    assert!(is_builtin_instance(&Value::Int(1), "el.lang.Number"));
    assert!(is_builtin_instance(&Value::Int(1), "el.lang.Object"));
    assert!(!is_builtin_instance(&Value::Int(1), "el.lang.Long"));
    assert!(!is_builtin_instance(&Value::Char('c'), "el.lang.Number"));
    assert!(!is_builtin_instance(&Value::Null, "el.lang.Object"));
    assert!(is_builtin_instance(&Value::object(Row(Vec::new())), "test.Row"));
}

#[test]
fn default_messages() {
    assert_eq!(EmptyContext.get_message("k", &[]), "k");
    assert_eq!(
        EmptyContext.get_message("k", &["a".to_owned(), "b".to_owned()]),
        "k(a, b)"
    );
}
