//! Shared fixtures for unit tests: parse-and-evaluate shortcuts and host
//! objects exposing each capability.

#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use rustc_hash::FxHashMap;

use crate::host::{DynaBean, HostObject, IndexedLookup, MapLookup, NamedPropertyResolver};
use crate::{CompiledExpression, EmptyContext, EvalContext, EvalError, EvalResult, Value};

pub(crate) fn compile(source: &str) -> CompiledExpression {
    let parsed = el_parse::parse(source).unwrap();
    CompiledExpression::new(source, parsed.arena, parsed.root, parsed.symbols)
}

pub(crate) fn eval_in(source: &str, ctx: &dyn EvalContext) -> EvalResult {
    compile(source).evaluate(ctx)
}

pub(crate) fn eval(source: &str) -> Value {
    eval_in(source, &EmptyContext).unwrap()
}

pub(crate) fn eval_err(source: &str) -> EvalError {
    eval_in(source, &EmptyContext).unwrap_err()
}

/// Host map.
#[derive(Debug, Default)]
pub(crate) struct Settings {
    pub entries: FxHashMap<String, Value>,
}

impl Settings {
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.entries.insert(key.to_owned(), value.into());
        self
    }
}

impl HostObject for Settings {
    fn type_name(&self) -> &str {
        "test.Settings"
    }

    fn as_map(&self) -> Option<&dyn MapLookup> {
        Some(self)
    }
}

impl MapLookup for Settings {
    fn get(&self, key: &str) -> Option<Value> {
        self.entries.get(key).cloned()
    }
}

/// Host sequence.
#[derive(Debug)]
pub(crate) struct Row(pub Vec<Value>);

impl HostObject for Row {
    fn type_name(&self) -> &str {
        "test.Row"
    }

    fn as_indexed(&self) -> Option<&dyn IndexedLookup> {
        Some(self)
    }
}

impl IndexedLookup for Row {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn get(&self, index: usize) -> Option<Value> {
        self.0.get(index).cloned()
    }
}

/// Computes `answer`; everything else falls through to the dyna-bean.
#[derive(Debug)]
pub(crate) struct Computed;

impl HostObject for Computed {
    fn type_name(&self) -> &str {
        "test.Computed"
    }

    fn as_property_resolver(&self) -> Option<&dyn NamedPropertyResolver> {
        Some(self)
    }

    fn as_dyna_bean(&self) -> Option<&dyn DynaBean> {
        Some(self)
    }
}

impl NamedPropertyResolver for Computed {
    fn resolve_property(&self, name: &str) -> Option<Value> {
        (name == "answer").then_some(Value::Int(42))
    }
}

impl DynaBean for Computed {
    fn has_property(&self, name: &str) -> bool {
        name == "kind"
    }

    fn get(&self, _name: &str) -> Value {
        Value::string("computed")
    }
}
