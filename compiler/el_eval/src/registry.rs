//! Shared function registry.
//!
//! Host functions are registered under their full name (`name` or
//! `prefix:name`). The registry is shared between the engine and every
//! context it creates, so functions registered later are visible to
//! contexts created earlier.
//!
//! Every registration bumps the registry's generation, which invalidates
//! call-site cache entries resolved before it.

use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::call_site::next_scope_id;
use crate::errors::HostError;
use crate::host::{function, Callable};
use crate::Value;

pub struct FunctionRegistry {
    id: u64,
    generation: AtomicU64,
    functions: RwLock<FxHashMap<String, Callable>>,
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl FunctionRegistry {
    pub fn new() -> Self {
        FunctionRegistry {
            id: next_scope_id(),
            generation: AtomicU64::new(0),
            functions: RwLock::new(FxHashMap::default()),
        }
    }

    /// Register (or replace) `full_name`.
    pub fn register(&self, full_name: impl Into<String>, callable: Callable) {
        let mut functions = self.functions.write();
        functions.insert(full_name.into(), callable);
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Identity of this registry, unique within the process.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Number of registrations so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Register a plain function taking only its arguments.
    pub fn register_fn<F>(&self, full_name: impl Into<String>, f: F)
    where
        F: Fn(&[Value]) -> Result<Value, HostError> + Send + Sync + 'static,
    {
        self.register(full_name, function(f));
    }

    pub fn get(&self, full_name: &str) -> Option<Callable> {
        self.functions.read().get(full_name).cloned()
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.functions.read().contains_key(full_name)
    }

    pub fn len(&self) -> usize {
        self.functions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.read().is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.functions.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionRegistry")
            .field("functions", &self.names())
            .finish()
    }
}
