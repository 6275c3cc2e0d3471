//! Evaluation context.
//!
//! [`EvalContext`] is everything the evaluator asks the host: variables, the
//! root object, functions, methods, conversions and messages. Only
//! `resolve_variable` is required; the defaults implement the standard
//! lookup rules on top of the builtin [`TypeBinder`].

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::binder::{Binder, TypeBinder};
use crate::call_site::ResolutionScope;
use crate::coerce::{default_convert, is_numeric, ConvertTarget};
use crate::errors::{index_out_of_bounds, invocation_failed, not_indexable, EvalResult};
use crate::host::Callable;
use crate::registry::FunctionRegistry;
use crate::Value;

/// Outcome of a variable lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Resolved {
    Value(Value),
    /// Known to the host and explicitly null. No parse-time fallback applies.
    Null,
    /// Unknown to the host.
    Absent,
}

pub trait EvalContext {
    fn resolve_variable(&self, name: &str) -> Resolved;

    /// Object that unqualified function calls fall back to.
    fn root(&self) -> Value {
        Value::Null
    }

    /// Function registered as `full_name` (`name` or `prefix:name`).
    fn resolve_function(&self, full_name: &str) -> Option<Callable> {
        let _ = full_name;
        None
    }

    fn binder(&self) -> &dyn Binder {
        TypeBinder::builtin().as_ref()
    }

    fn resolve_method(&self, owner: &Value, name: &str, args: &[Value]) -> Option<Callable> {
        self.binder().method(owner, name, args)
    }

    /// Read `owner.name`. `Ok(None)` means no capability knows the property.
    fn property(&self, owner: &Value, name: &str) -> EvalResult<Option<Value>> {
        lookup_property(self, owner, name)
    }

    /// Convert a value the coercion rules don't cover.
    fn convert(&self, value: &Value, target: ConvertTarget) -> EvalResult<Value> {
        default_convert(value, target)
    }

    fn get_array_item(&self, target: &Value, index: i64) -> EvalResult<Value> {
        array_item(target, index)
    }

    /// Render a message key with its arguments.
    fn get_message(&self, key: &str, args: &[String]) -> String {
        if args.is_empty() {
            key.to_owned()
        } else {
            format!("{key}({})", args.join(", "))
        }
    }

    fn to_display_string(&self, value: &Value) -> String {
        value.to_string()
    }

    /// `value instanceof T(type_name)`.
    fn is_instance(&self, value: &Value, type_name: &str) -> bool {
        is_builtin_instance(value, type_name)
    }

    /// Tables behind `resolve_function` and `resolve_method`. Call sites
    /// only reuse a callable resolved under an equal scope; `None` turns
    /// caching off for this context.
    fn resolution_scope(&self) -> Option<ResolutionScope> {
        None
    }
}

/// Property lookup through the capability chain: map, property resolver,
/// dyna-bean, then the context's binder. The first capability an owner
/// exposes wins.
pub fn lookup_property<C: EvalContext + ?Sized>(
    ctx: &C,
    owner: &Value,
    name: &str,
) -> EvalResult<Option<Value>> {
    match owner {
        Value::Map(entries) => return Ok(Some(entries.get(name).cloned().unwrap_or(Value::Null))),
        Value::Object(obj) => {
            if let Some(map) = obj.as_map() {
                return Ok(Some(map.get(name).unwrap_or(Value::Null)));
            }
            if let Some(value) = obj
                .as_property_resolver()
                .and_then(|r| r.resolve_property(name))
            {
                return Ok(Some(value));
            }
            if let Some(bean) = obj.as_dyna_bean().filter(|b| b.has_property(name)) {
                return Ok(Some(bean.get(name)));
            }
        }
        _ => {}
    }
    ctx.binder()
        .property(owner, name)
        .map_err(|cause| invocation_failed(name, cause))
}

/// Positional read from lists, host indexed objects and maps.
pub fn array_item(target: &Value, index: i64) -> EvalResult<Value> {
    match target {
        Value::List(items) => usize::try_from(index)
            .ok()
            .and_then(|i| items.get(i))
            .cloned()
            .ok_or_else(|| index_out_of_bounds(index, items.len())),
        Value::Map(entries) => Ok(entries
            .get(&index.to_string())
            .cloned()
            .unwrap_or(Value::Null)),
        Value::Object(obj) => {
            if let Some(indexed) = obj.as_indexed() {
                return usize::try_from(index)
                    .ok()
                    .and_then(|i| indexed.get(i))
                    .ok_or_else(|| index_out_of_bounds(index, indexed.len()));
            }
            match obj.as_map() {
                Some(map) => Ok(map.get(&index.to_string()).unwrap_or(Value::Null)),
                None => Err(not_indexable(obj.type_name())),
            }
        }
        other => Err(not_indexable(other.type_name())),
    }
}

/// Builtin `instanceof`: exact type name, `el.lang.Number` for any number,
/// `el.lang.Object` for anything but null.
pub fn is_builtin_instance(value: &Value, type_name: &str) -> bool {
    match type_name {
        _ if value.is_null() => false,
        "el.lang.Object" => true,
        "el.lang.Number" => is_numeric(value),
        name => value.type_name() == name,
    }
}

/// Context with no variables, no functions and the builtin binder.
#[derive(Copy, Clone, Debug, Default)]
pub struct EmptyContext;

impl EvalContext for EmptyContext {
    fn resolve_variable(&self, _name: &str) -> Resolved {
        Resolved::Absent
    }

    fn resolution_scope(&self) -> Option<ResolutionScope> {
        Some(ResolutionScope::builtin())
    }
}

/// Map-backed context.
///
/// Variables set to [`Value::Null`] resolve as explicitly null.
#[derive(Clone, Debug)]
pub struct DefaultEvalContext {
    root: Value,
    variables: FxHashMap<String, Value>,
    functions: Arc<FunctionRegistry>,
    binder: Arc<TypeBinder>,
}

impl Default for DefaultEvalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultEvalContext {
    pub fn new() -> Self {
        DefaultEvalContext {
            root: Value::Null,
            variables: FxHashMap::default(),
            functions: Arc::new(FunctionRegistry::new()),
            binder: Arc::clone(TypeBinder::builtin()),
        }
    }

    #[must_use]
    pub fn with_root(mut self, root: impl Into<Value>) -> Self {
        self.root = root.into();
        self
    }

    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_variable(name, value);
        self
    }

    #[must_use]
    pub fn with_functions(mut self, functions: Arc<FunctionRegistry>) -> Self {
        self.functions = functions;
        self
    }

    #[must_use]
    pub fn with_binder(mut self, binder: Arc<TypeBinder>) -> Self {
        self.binder = binder;
        self
    }

    pub fn set_variable(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.variables.insert(name.into(), value.into());
    }

    pub fn remove_variable(&mut self, name: &str) -> Option<Value> {
        self.variables.remove(name)
    }

    pub fn functions(&self) -> &Arc<FunctionRegistry> {
        &self.functions
    }
}

impl EvalContext for DefaultEvalContext {
    fn resolve_variable(&self, name: &str) -> Resolved {
        match self.variables.get(name) {
            Some(Value::Null) => Resolved::Null,
            Some(value) => Resolved::Value(value.clone()),
            None => Resolved::Absent,
        }
    }

    fn root(&self) -> Value {
        self.root.clone()
    }

    fn resolve_function(&self, full_name: &str) -> Option<Callable> {
        self.functions.get(full_name)
    }

    fn binder(&self) -> &dyn Binder {
        self.binder.as_ref()
    }

    fn resolution_scope(&self) -> Option<ResolutionScope> {
        Some(ResolutionScope::new(&self.functions, &self.binder))
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
