use std::sync::Arc;

use pretty_assertions::assert_eq;

use super::*;
use crate::host::function;
use crate::test_helpers::{Row, Settings};

fn returning(value: i32) -> Callable {
    function(move |_| Ok(Value::Int(value)))
}

fn call(target: &Callable) -> Value {
    target.invoke(None, &[]).unwrap()
}

fn typed(value: &Value) -> Receiver {
    Receiver::Typed(RuntimeType::of(value))
}

fn scope() -> ResolutionScope {
    ResolutionScope::builtin()
}

#[test]
fn empty_cache_misses() {
    let cache = CallSiteCache::new();
    assert!(cache.is_empty());
    assert!(cache.get(scope(), None).is_none());
    assert!(cache.get(scope(), Some(&Value::Int(1))).is_none());
}

#[test]
fn free_and_typed_entries_do_not_mix() {
    let cache = CallSiteCache::new();
    cache.publish(scope(), Receiver::Free, &returning(1));
    assert_eq!(call(&cache.get(scope(), None).unwrap()), Value::Int(1));
    assert!(cache.get(scope(), Some(&Value::Int(1))).is_none());

    cache.publish(scope(), typed(&Value::Int(0)), &returning(2));
    assert_eq!(call(&cache.get(scope(), Some(&Value::Int(9))).unwrap()), Value::Int(2));
    assert!(cache.get(scope(), Some(&Value::Long(9))).is_none());
    assert_eq!(cache.len(), 2);
}

#[test]
fn first_publish_wins() {
    let cache = CallSiteCache::new();
    cache.publish(scope(), Receiver::Free, &returning(1));
    cache.publish(scope(), Receiver::Free, &returning(2));
    assert_eq!(cache.len(), 1);
    assert_eq!(call(&cache.get(scope(), None).unwrap()), Value::Int(1));
}

#[test]
fn host_types_are_keyed_by_name() {
    let cache = CallSiteCache::new();
    let settings = Value::object(Settings::default());
    cache.publish(scope(), typed(&settings), &returning(1));
    assert!(cache.get(scope(), Some(&Value::object(Settings::default()))).is_some());
    assert!(cache.get(scope(), Some(&Value::object(Row(Vec::new())))).is_none());
}

#[test]
fn full_cache_stops_publishing() {
    let cache = CallSiteCache::new();
    let receivers = [
        Value::Int(0),
        Value::Long(0),
        Value::string(""),
        Value::Bool(false),
        Value::Double(0.0),
    ];
    for (i, receiver) in (0..).zip(&receivers) {
        cache.publish(scope(), typed(receiver), &returning(i));
    }
    assert_eq!(cache.len(), CACHE_WAYS);
    assert_eq!(call(&cache.get(scope(), Some(&Value::Bool(true))).unwrap()), Value::Int(3));
    assert!(cache.get(scope(), Some(&Value::Double(1.0))).is_none());
}

#[test]
fn concurrent_publishers_agree() {
    let cache = Arc::new(CallSiteCache::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || {
                cache.publish(scope(), Receiver::Free, &returning(i));
                call(&cache.get(scope(), None).unwrap())
            })
        })
        .collect();
    let seen: Vec<Value> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(cache.len(), 1);
    assert!(seen.windows(2).all(|w| w[0] == w[1]));
}

#[test]
fn debug_lists_receivers() {
    let cache = CallSiteCache::new();
    cache.publish(scope(), Receiver::Free, &returning(1));
    assert_eq!(format!("{cache:?}"), "CallSiteCache { receivers: [Free] }");
}

#[test]
fn entries_are_scoped() {
    let cache = CallSiteCache::new();
    let binder = TypeBinder::builtin();
    let first = FunctionRegistry::new();
    let second = FunctionRegistry::new();
    let in_first = ResolutionScope::new(&first, binder);
    let in_second = ResolutionScope::new(&second, binder);

    cache.publish(in_first, Receiver::Free, &returning(1));
    assert!(cache.get(in_second, None).is_none());
    cache.publish(in_second, Receiver::Free, &returning(2));
    assert_eq!(call(&cache.get(in_first, None).unwrap()), Value::Int(1));
    assert_eq!(call(&cache.get(in_second, None).unwrap()), Value::Int(2));
    assert_eq!(cache.len(), 2);
}

#[test]
fn registration_changes_the_scope() {
    let registry = FunctionRegistry::new();
    let binder = TypeBinder::builtin();
    let before = ResolutionScope::new(&registry, binder);
    assert_eq!(ResolutionScope::new(&registry, binder), before);
    registry.register_fn("f", |_| Ok(Value::Null));
    assert_ne!(ResolutionScope::new(&registry, binder), before);
}

#[test]
fn binder_changes_the_scope() {
    let registry = FunctionRegistry::new();
    let mut binder = TypeBinder::with_builtins();
    let before = ResolutionScope::new(&registry, &binder);
    let copy = binder.clone();
    assert_ne!(ResolutionScope::new(&registry, &copy), before);
    binder.add_method("el.lang.String", "shout", returning(1));
    assert_ne!(ResolutionScope::new(&registry, &binder), before);
}
