//! Per-call-site resolution cache.
//!
//! Every `Method` and `Function` node owns one [`CallSiteCache`]: a small
//! polymorphic inline cache of `(scope, receiver type, callable)` entries.
//! Entries are published with `OnceLock`, never replaced and never locked:
//!
//! - concurrent misses may both resolve; the first to publish wins the slot
//!   and the other's result is used for its own call only
//! - an entry is only used when both its [`ResolutionScope`] and its
//!   receiver type match
//! - once every slot is taken, further receivers resolve uncached
//!
//! Contexts that can't name their scope are never cached.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;

use crate::binder::TypeBinder;
use crate::host::Callable;
use crate::registry::FunctionRegistry;
use crate::value::RuntimeType;
use crate::Value;

/// Number of receiver types a call site remembers.
pub const CACHE_WAYS: usize = 4;

/// Fresh identity for a function registry or type binder.
pub(crate) fn next_scope_id() -> u64 {
    static NEXT: AtomicU64 = AtomicU64::new(1);
    NEXT.fetch_add(1, Ordering::Relaxed)
}

/// The tables a context resolves calls against.
///
/// Two contexts with equal scopes resolve every function and method name to
/// the same callable. Registering a function bumps the registry's
/// generation, and any change to a binder gives it a new identity, so a
/// scope taken before the change no longer matches.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResolutionScope {
    functions: u64,
    generation: u64,
    binder: u64,
}

impl ResolutionScope {
    pub fn new(functions: &FunctionRegistry, binder: &TypeBinder) -> Self {
        ResolutionScope {
            functions: functions.id(),
            generation: functions.generation(),
            binder: binder.id(),
        }
    }

    /// No functions and the builtin binder.
    pub fn builtin() -> Self {
        ResolutionScope {
            functions: 0,
            generation: 0,
            binder: TypeBinder::builtin().id(),
        }
    }
}

/// What a cached callable was resolved against.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Receiver {
    /// A free function, called without a receiver.
    Free,
    /// A method on a receiver of this type.
    Typed(RuntimeType),
}

impl Receiver {
    fn matches(&self, receiver: Option<&Value>) -> bool {
        match (self, receiver) {
            (Receiver::Free, None) => true,
            (Receiver::Typed(ty), Some(value)) => ty.matches(value),
            _ => false,
        }
    }
}

struct CacheEntry {
    scope: ResolutionScope,
    receiver: Receiver,
    target: Callable,
}

pub struct CallSiteCache {
    entries: [OnceLock<CacheEntry>; CACHE_WAYS],
}

impl Default for CallSiteCache {
    fn default() -> Self {
        Self::new()
    }
}

impl CallSiteCache {
    pub fn new() -> Self {
        CallSiteCache {
            entries: std::array::from_fn(|_| OnceLock::new()),
        }
    }

    /// Cached callable for `receiver` (`None` for a free function) resolved
    /// in `scope`.
    ///
    /// Slots fill in order, so the scan stops at the first empty one.
    pub fn get(&self, scope: ResolutionScope, receiver: Option<&Value>) -> Option<Callable> {
        let hit = self
            .entries
            .iter()
            .map_while(OnceLock::get)
            .find(|entry| entry.scope == scope && entry.receiver.matches(receiver))
            .map(|entry| Callable::clone(&entry.target));
        tracing::trace!(hit = hit.is_some(), "call site lookup");
        hit
    }

    /// Remember `target` for `receiver` in `scope` unless an entry for the
    /// pair already exists. Does nothing once all slots are taken.
    pub fn publish(&self, scope: ResolutionScope, receiver: Receiver, target: &Callable) {
        for slot in &self.entries {
            let entry = slot.get_or_init(|| CacheEntry {
                scope,
                receiver: receiver.clone(),
                target: Callable::clone(target),
            });
            if entry.scope == scope && entry.receiver == receiver {
                return;
            }
        }
        tracing::debug!(?receiver, "call site cache full, resolving uncached");
    }

    /// Number of published entries.
    pub fn len(&self) -> usize {
        self.entries.iter().map_while(OnceLock::get).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for CallSiteCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let receivers: Vec<&Receiver> = self
            .entries
            .iter()
            .map_while(OnceLock::get)
            .map(|entry| &entry.receiver)
            .collect();
        f.debug_struct("CallSiteCache")
            .field("receivers", &receivers)
            .finish()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
