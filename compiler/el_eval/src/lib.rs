//! EL Eval - tree-walking evaluator for EL expressions.
//!
//! # Architecture
//!
//! - [`Value`]: dynamically typed runtime values
//! - [`EvalContext`]: what the evaluator asks the host (variables, root,
//!   functions, methods, conversions, messages)
//! - [`HostObject`] and its capabilities: how host values expose maps,
//!   indexed access and properties without reflection
//! - [`TypeBinder`]: table-driven getters and methods per type name
//! - `evaluate_binary` / `evaluate_unary`: operator semantics with numeric
//!   promotion (see [`coerce`])
//! - [`CompiledExpression`]: a parsed expression plus its per-call-site
//!   resolution caches, evaluated by the interpreter
//!
//! Building a `CompiledExpression` from text is the parser's job; this
//! crate takes the arena, root and symbols it produces.

pub mod binder;
pub mod call_site;
pub mod coerce;
mod compiled;
pub mod context;
pub mod errors;
pub mod host;
mod interpreter;
mod operators;
mod registry;
mod unary_operators;
pub mod value;

pub use binder::{Binder, Getter, TypeBinder};
pub use call_site::ResolutionScope;
pub use compiled::CompiledExpression;
pub use context::{DefaultEvalContext, EmptyContext, EvalContext, Resolved};
pub use errors::{EvalError, EvalErrorKind, EvalResult, HostError};
pub use host::{
    function, method, Callable, DynaBean, HostObject, IndexedLookup, Invokable, MapLookup,
    NamedPropertyResolver,
};
pub use operators::{compare, equals, evaluate_binary};
pub use registry::FunctionRegistry;
pub use unary_operators::evaluate_unary;
pub use value::{RuntimeType, Value};

#[cfg(test)]
mod test_helpers;
