//! Host capabilities.
//!
//! Host objects don't get reflected over. Instead they opt in to the lookups
//! the evaluator understands by returning a capability from [`HostObject`]:
//!
//! - [`MapLookup`]: `obj.key`, `obj['key']`, `obj contains 'key'`
//! - [`IndexedLookup`]: `obj[0]`, `obj contains value`
//! - [`NamedPropertyResolver`]: computed properties
//! - [`DynaBean`]: properties with a dynamic schema
//!
//! Anything else goes through the context's [`Binder`](crate::Binder).
//! Callables registered with the host implement [`Invokable`].

use std::fmt;
use std::sync::Arc;

use crate::errors::HostError;
use crate::Value;

/// A value owned by the host application.
pub trait HostObject: fmt::Debug + Send + Sync {
    /// Qualified type name, used for binder lookups, `instanceof` and errors.
    fn type_name(&self) -> &str;

    fn as_map(&self) -> Option<&dyn MapLookup> {
        None
    }

    fn as_indexed(&self) -> Option<&dyn IndexedLookup> {
        None
    }

    fn as_property_resolver(&self) -> Option<&dyn NamedPropertyResolver> {
        None
    }

    fn as_dyna_bean(&self) -> Option<&dyn DynaBean> {
        None
    }

    fn to_display_string(&self) -> String {
        format!("{}@{:p}", self.type_name(), self)
    }
}

/// String-keyed map access.
pub trait MapLookup {
    fn get(&self, key: &str) -> Option<Value>;

    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

/// Positional access.
pub trait IndexedLookup {
    fn len(&self) -> usize;

    fn get(&self, index: usize) -> Option<Value>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Properties computed on demand. `None` means "not mine", and the lookup
/// moves on to the next capability.
pub trait NamedPropertyResolver {
    fn resolve_property(&self, name: &str) -> Option<Value>;
}

/// Bean whose property set is only known at runtime.
pub trait DynaBean {
    fn has_property(&self, name: &str) -> bool;

    /// Value of a property for which `has_property` is true.
    fn get(&self, name: &str) -> Value;
}

/// A host function or method.
///
/// `receiver` is the owner for method calls and `None` for free functions.
pub trait Invokable: Send + Sync {
    fn invoke(&self, receiver: Option<&Value>, args: &[Value]) -> Result<Value, HostError>;
}

impl<F> Invokable for F
where
    F: Fn(Option<&Value>, &[Value]) -> Result<Value, HostError> + Send + Sync,
{
    fn invoke(&self, receiver: Option<&Value>, args: &[Value]) -> Result<Value, HostError> {
        self(receiver, args)
    }
}

/// Shared handle to a resolved callable.
pub type Callable = Arc<dyn Invokable>;

/// Wrap a free function.
pub fn function<F>(f: F) -> Callable
where
    F: Fn(&[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
{
    Arc::new(move |_: Option<&Value>, args: &[Value]| f(args))
}

/// Wrap a method; invoking it without a receiver fails.
pub fn method<F>(f: F) -> Callable
where
    F: Fn(&Value, &[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
{
    Arc::new(
        move |receiver: Option<&Value>, args: &[Value]| match receiver {
            Some(receiver) => f(receiver, args),
            None => Err("method called without a receiver".into()),
        },
    )
}
