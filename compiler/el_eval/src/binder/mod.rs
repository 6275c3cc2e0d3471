//! Property and method binding.
//!
//! A [`Binder`] answers `owner.name` and `owner.name(...)` for values that
//! don't expose a host capability. [`TypeBinder`] is the table-driven
//! implementation: per qualified type name it holds property getters,
//! methods, static fields and static methods. Lookups on an instance try its
//! own type, then `el.lang.Number` for numbers, then `el.lang.Object`.
//! Lookups on a class literal (`T(Integer).MAX_VALUE`) only see statics.

mod builtins;

use std::sync::{Arc, OnceLock};

use rustc_hash::FxHashMap;

use crate::call_site::next_scope_id;
use crate::coerce::is_numeric;
use crate::errors::HostError;
use crate::host::Callable;
use crate::Value;

/// Bean-style property getter.
pub type Getter = Arc<dyn Fn(&Value) -> Result<Value, HostError> + Send + Sync>;

pub trait Binder: Send + Sync {
    /// Read `owner.name`. `Ok(None)` means the owner's type has no such
    /// property.
    fn property(&self, owner: &Value, name: &str) -> Result<Option<Value>, HostError>;

    /// Find a callable for `owner.name(args)`.
    fn method(&self, owner: &Value, name: &str, args: &[Value]) -> Option<Callable>;
}

const NUMBER_TYPE: &str = "el.lang.Number";
const OBJECT_TYPE: &str = "el.lang.Object";

#[derive(Clone, Default)]
struct TypeBindings {
    getters: FxHashMap<String, Getter>,
    methods: FxHashMap<String, Callable>,
    static_fields: FxHashMap<String, Value>,
    static_methods: FxHashMap<String, Callable>,
}

/// Registry of per-type bindings.
///
/// Each binder carries an identity that changes on clone and on every
/// mutation, so call sites never reuse a method resolved by another table.
pub struct TypeBinder {
    id: u64,
    types: FxHashMap<String, TypeBindings>,
}

impl Default for TypeBinder {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for TypeBinder {
    fn clone(&self) -> Self {
        TypeBinder {
            id: next_scope_id(),
            types: self.types.clone(),
        }
    }
}

impl TypeBinder {
    /// An empty binder.
    pub fn new() -> Self {
        TypeBinder {
            id: next_scope_id(),
            types: FxHashMap::default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// A binder preloaded with the `el.lang` string, collection and number
    /// bindings.
    pub fn with_builtins() -> Self {
        let mut binder = Self::new();
        builtins::register(&mut binder);
        binder
    }

    /// Shared instance of [`TypeBinder::with_builtins`].
    pub fn builtin() -> &'static Arc<TypeBinder> {
        static BUILTIN: OnceLock<Arc<TypeBinder>> = OnceLock::new();
        BUILTIN.get_or_init(|| Arc::new(TypeBinder::with_builtins()))
    }

    pub fn add_getter<F>(&mut self, type_name: &str, name: &str, getter: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        self.bindings(type_name)
            .getters
            .insert(name.to_owned(), Arc::new(getter));
        self
    }

    pub fn add_method(&mut self, type_name: &str, name: &str, method: Callable) -> &mut Self {
        self.bindings(type_name)
            .methods
            .insert(name.to_owned(), method);
        self
    }

    pub fn add_static_field(
        &mut self,
        type_name: &str,
        name: &str,
        value: impl Into<Value>,
    ) -> &mut Self {
        self.bindings(type_name)
            .static_fields
            .insert(name.to_owned(), value.into());
        self
    }

    pub fn add_static_method(&mut self, type_name: &str, name: &str, method: Callable) -> &mut Self {
        self.bindings(type_name)
            .static_methods
            .insert(name.to_owned(), method);
        self
    }

    fn bindings(&mut self, type_name: &str) -> &mut TypeBindings {
        self.id = next_scope_id();
        self.types.entry(type_name.to_owned()).or_default()
    }

    /// Bindings that apply to an instance, most specific first.
    fn instance_chain<'a>(&'a self, owner: &'a Value) -> impl Iterator<Item = &'a TypeBindings> {
        let number = is_numeric(owner).then_some(NUMBER_TYPE);
        [Some(owner.type_name()), number, Some(OBJECT_TYPE)]
            .into_iter()
            .flatten()
            .filter_map(|name| self.types.get(name))
    }
}

impl Binder for TypeBinder {
    fn property(&self, owner: &Value, name: &str) -> Result<Option<Value>, HostError> {
        if let Value::Type(type_name) = owner {
            let field = self
                .types
                .get(&**type_name)
                .and_then(|b| b.static_fields.get(name));
            return Ok(field.cloned());
        }
        match self.instance_chain(owner).find_map(|b| b.getters.get(name)) {
            Some(getter) => getter(owner).map(Some),
            None => Ok(None),
        }
    }

    fn method(&self, owner: &Value, name: &str, _args: &[Value]) -> Option<Callable> {
        if let Value::Type(type_name) = owner {
            return self
                .types
                .get(&**type_name)
                .and_then(|b| b.static_methods.get(name))
                .cloned();
        }
        self.instance_chain(owner)
            .find_map(|b| b.methods.get(name))
            .cloned()
    }
}

impl std::fmt::Debug for TypeBinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<&String> = self.types.keys().collect();
        names.sort_unstable();
        f.debug_struct("TypeBinder").field("types", &names).finish()
    }
}
