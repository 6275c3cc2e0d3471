use pretty_assertions::assert_eq;

use crate::binder::{Binder, TypeBinder};
use crate::Value;

fn call(owner: impl Into<Value>, name: &str, args: &[Value]) -> Result<Value, String> {
    let owner = owner.into();
    let binder = TypeBinder::builtin();
    let target = binder
        .method(&owner, name, args)
        .ok_or_else(|| format!("no method {name}"))?;
    target.invoke(Some(&owner), args).map_err(|e| e.to_string())
}

fn s(text: &str) -> Value {
    Value::string(text)
}

#[test]
fn string_methods() {
    assert_eq!(call("héllo", "length", &[]), Ok(Value::Int(5)));
    assert_eq!(call("abc", "toUpperCase", &[]), Ok(s("ABC")));
    assert_eq!(call("  x ", "trim", &[]), Ok(s("x")));
    assert_eq!(call("hello", "substring", &[Value::Int(1), Value::Int(3)]), Ok(s("el")));
    assert_eq!(call("hello", "substring", &[Value::Int(2)]), Ok(s("llo")));
    assert_eq!(call("héllo", "indexOf", &[s("l")]), Ok(Value::Int(2)));
    assert_eq!(call("hello", "indexOf", &[s("z")]), Ok(Value::Int(-1)));
    assert_eq!(call("hello", "charAt", &[Value::Int(1)]), Ok(Value::Char('e')));
    assert_eq!(call("a,b", "split", &[s(",")]), Ok(Value::list(vec![s("a"), s("b")])));
    assert_eq!(call("Abc", "equalsIgnoreCase", &[s("aBC")]), Ok(Value::Bool(true)));
}

#[test]
fn string_method_errors() {
    assert!(call("hello", "substring", &[Value::Int(4), Value::Int(9)]).is_err());
    assert!(call("hello", "charAt", &[Value::Int(-1)]).is_err());
    assert_eq!(
        call("hello", "trim", &[Value::Int(1)]),
        Err("trim expects 0 argument(s), got 1".to_owned())
    );
}

#[test]
fn string_empty_property() {
    let binder = TypeBinder::builtin();
    assert_eq!(binder.property(&s(""), "empty").unwrap(), Some(Value::Bool(true)));
}

#[test]
fn list_methods() {
    let list = Value::list(vec![Value::Int(1), s("two")]);
    assert_eq!(call(list.clone(), "size", &[]), Ok(Value::Int(2)));
    assert_eq!(call(list.clone(), "get", &[Value::Long(1)]), Ok(s("two")));
    assert_eq!(call(list.clone(), "contains", &[s("two")]), Ok(Value::Bool(true)));
    assert_eq!(call(list.clone(), "indexOf", &[Value::Int(1)]), Ok(Value::Int(0)));
    assert!(call(list, "get", &[Value::Int(5)]).is_err());
}

#[test]
fn map_methods() {
    let map = Value::map([("b", Value::Int(2)), ("a", Value::Int(1))]);
    assert_eq!(call(map.clone(), "size", &[]), Ok(Value::Int(2)));
    assert_eq!(call(map.clone(), "containsKey", &[s("a")]), Ok(Value::Bool(true)));
    assert_eq!(call(map.clone(), "get", &[s("zz")]), Ok(Value::Null));
    assert_eq!(call(map, "keySet", &[]), Ok(Value::list(vec![s("a"), s("b")])));
}

#[test]
fn number_and_object_methods() {
    assert_eq!(call(Value::Double(2.7), "intValue", &[]), Ok(Value::Int(2)));
    assert_eq!(call(Value::Int(3), "doubleValue", &[]), Ok(Value::Double(3.0)));
    assert_eq!(call(Value::Int(3), "toString", &[]), Ok(s("3")));
    assert_eq!(call(Value::Int(3), "equals", &[Value::Int(3)]), Ok(Value::Bool(true)));
    assert_eq!(call(Value::Int(3), "equals", &[Value::Long(3)]), Ok(Value::Bool(false)));
}

#[test]
fn statics() {
    let binder = TypeBinder::builtin();
    let integer = Value::type_ref("el.lang.Integer");
    assert_eq!(
        binder.property(&integer, "MAX_VALUE").unwrap(),
        Some(Value::Int(i32::MAX))
    );
    let parse = binder.method(&integer, "parseInt", &[]).unwrap();
    assert_eq!(parse.invoke(None, &[s(" 12 ")]).unwrap(), Value::Int(12));
    assert!(parse.invoke(None, &[s("x")]).is_err());
}
